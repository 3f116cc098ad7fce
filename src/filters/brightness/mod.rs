//! # Brightness Filter Implementation
//!
//! Shifts the red, green and blue channels by a signed fraction of full
//! scale, optionally inverting them afterwards.

mod effect;

pub use effect::{BrightnessFilter, BrightnessOptions};

// Brightness-specific option names
pub const AMOUNT: &str = "amount";
pub const INVERT: &str = "invert";
