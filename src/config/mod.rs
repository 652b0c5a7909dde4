//! Configuration management for the carry calculator

pub mod settings;

pub use settings::*;
