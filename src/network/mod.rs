//! Quote provider clients

pub mod providers;

pub use providers::*;
