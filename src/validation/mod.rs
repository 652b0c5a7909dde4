//! Plausibility checks on fetched quotes

pub mod quote;

pub use quote::*;
