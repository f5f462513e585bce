//! Per-user country status store.
//!
//! Each user owns a flat mapping from two-letter country code to a status
//! label. This crate provides:
//! - `StatusStore` trait with the create/read/update/delete contract
//! - `InMemoryStatusStore`, a process-lifetime implementation
//! - `StatusError`, the validation and lookup failures clients can see

pub mod error;
pub mod memory;
pub mod store;

pub use common::UserId;
pub use error::{Result, StatusError};
pub use memory::InMemoryStatusStore;
pub use store::{CountryStatusMap, StatusEntry, StatusStore};
