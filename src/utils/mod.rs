//! Utility functions and helpers

pub mod lookup;
pub mod logging;
pub mod display;

pub use lookup::*;
pub use logging::*;
pub use display::*;
