//! # pixel-filters
//!
//! Pluggable image filters over raw RGBA buffers, configured through a typed
//! option schema.
//!
//! A filter declares its options (kind, default, bounds) and exposes a pure
//! transform over `(pixels, width, height, options)`. Hosts resolve option
//! values against those declarations, then run the transform.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixel_filters::{
//!     filters::{Filter, GridFilter},
//!     filters::grid::GridOptions,
//! };
//!
//! let grid = GridFilter::new()?;
//! let mut pixels = vec![255u8; 16 * 16 * 4];
//! let options = GridOptions { stripes: 4, ..Default::default() };
//!
//! let out = grid.apply(&mut pixels, 16, 16, &options);
//! assert_eq!(out.len(), 16 * 16 * 4);
//! # Ok::<(), pixel_filters::FilterError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`options`] - Option declarations, values and resolution
//! - [`filters`] - The filter contract, registry and built-in filters
//! - [`frame`] - RGBA image wrapper used by hosts
//! - [`pipeline`] - Engine that runs configured filter steps over images
//! - [`config`] - Configuration management
//!
//! ## Creating Custom Filters
//!
//! Implement [`FilterInfo`](filters::FilterInfo) and
//! [`Filter`](filters::Filter) with a typed options struct:
//!
//! ```rust
//! use pixel_filters::{
//!     error::{FilterError, Result},
//!     filters::{Filter, FilterInfo},
//!     options::{boolean_option, OptionList, ResolvedOptions},
//! };
//!
//! struct Swap {
//!     options: OptionList,
//! }
//!
//! struct SwapOptions {
//!     enabled: bool,
//! }
//!
//! impl TryFrom<&ResolvedOptions> for SwapOptions {
//!     type Error = FilterError;
//!
//!     fn try_from(options: &ResolvedOptions) -> Result<Self> {
//!         Ok(Self { enabled: options.require_bool("enabled")? })
//!     }
//! }
//!
//! impl FilterInfo for Swap {
//!     fn name(&self) -> &str { "Swap" }
//!     fn description(&self) -> &str { "Swaps red and blue" }
//!     fn options(&self) -> &OptionList { &self.options }
//! }
//!
//! impl Filter for Swap {
//!     type Options = SwapOptions;
//!
//!     fn apply<'a>(&self, pixels: &'a mut [u8], _w: u32, _h: u32, options: &SwapOptions) -> &'a mut [u8] {
//!         if options.enabled {
//!             pixels.chunks_exact_mut(4).for_each(|p| p.swap(0, 2));
//!         }
//!         pixels
//!     }
//! }
//!
//! let swap = Swap { options: OptionList::new(vec![boolean_option("enabled", true)?])? };
//! # Ok::<(), FilterError>(())
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod frame;
pub mod options;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{FilterError, Result},
    filters::{DynFilter, Filter, FilterInfo, FilterRegistry},
    frame::Frame,
    pipeline::FilterEngine,
};
