pub mod statuses;
pub mod system;
