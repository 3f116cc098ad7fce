//! # Grid Filter Implementation
//!
//! Tints alternating horizontal and vertical bands of an image, producing a
//! plaid-like grid of approximately equal stripes.

use crate::options::Rgb;

mod effect;

pub use effect::{GridFilter, GridOptions};

// Grid-specific option names
pub const STRIPES: &str = "stripes";
pub const ROW_COLOR: &str = "rowColor";
pub const COL_COLOR: &str = "colColor";
pub const STRENGTH: &str = "strength";

// Declared defaults
pub const DEFAULT_STRIPES: i64 = 10;
pub const DEFAULT_ROW_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const DEFAULT_COL_COLOR: Rgb = Rgb::new(0x00, 0x00, 0xff);
pub const DEFAULT_STRENGTH: f64 = 15.0;
