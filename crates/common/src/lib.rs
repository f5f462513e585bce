//! Shared value types for the country status tracker.

pub mod types;

pub use types::{InvalidIsoCode, IsoCode, UserId};
