//! Carry-trade yield computation

pub mod calculator;
pub mod pipeline;
pub mod source;

pub use calculator::*;
pub use pipeline::*;
pub use source::*;
