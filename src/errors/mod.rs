//! Error types for quote fetching and yield computation

pub mod carry_error;

pub use carry_error::*;
