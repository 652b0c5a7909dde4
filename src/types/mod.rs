//! Core data types and structures

pub mod quotes;
pub mod schema;

pub use quotes::*;
pub use schema::*;
