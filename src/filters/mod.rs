//! # Filter System
//!
//! This module provides the filter contract and the built-in filters. Every
//! filter is a pure transform over an RGBA buffer, configured through the
//! options it declares.
//!
//! ## Built-in Filters
//!
//! - **Grid** (`grid`): tints alternating row and column bands
//! - **Brightness** (`brightness`): shifts channel values, optional inversion
//!
//! ## Usage
//!
//! ```rust
//! use pixel_filters::filters::{DynFilter, FilterInfo, FilterRegistry};
//!
//! let registry = FilterRegistry::new();
//! let grid = registry.get_filter("grid")?;
//!
//! let mut pixels = vec![128u8; 8 * 8 * 4];
//! let options = grid.options().defaults();
//! grid.apply_resolved(&mut pixels, 8, 8, &options)?;
//! # Ok::<(), pixel_filters::FilterError>(())
//! ```

pub mod registry;
pub mod traits;

// Filter implementations
pub mod brightness;
pub mod grid;

pub use registry::FilterRegistry;
pub use traits::{check_geometry, DynFilter, Filter, FilterInfo};

pub use brightness::BrightnessFilter;
pub use grid::GridFilter;
