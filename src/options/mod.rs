//! # Option Schema
//!
//! Typed declarations for the configurable parameters of a filter, and the
//! values bound to them for one invocation.
//!
//! The set of option kinds is closed:
//!
//! - **Percentage**: a number in [0, 100], normalized by dividing by 100
//! - **Number**: a real number with optional inclusive bounds
//! - **Integer**: a whole number with optional inclusive bounds
//! - **Color**: a `#RRGGBB` hex string
//! - **Boolean**: a flag
//!
//! Declarations validate their own default when they are built, so a bad
//! declaration fails immediately instead of when a filter first runs.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use pixel_filters::options::{integer_option, percentage_option, OptionList, OptionValue};
//!
//! let list = OptionList::new(vec![
//!     integer_option("stripes", 10, Some(2), None)?,
//!     percentage_option("strength", 15.0)?,
//! ])?;
//!
//! let mut overrides = HashMap::new();
//! overrides.insert("stripes".to_string(), OptionValue::Integer(4));
//!
//! let resolved = list.resolve(&overrides)?;
//! assert_eq!(resolved.get_i64("stripes"), Some(4));
//! assert_eq!(resolved.get_f64("strength"), Some(15.0));
//! # Ok::<(), pixel_filters::error::OptionError>(())
//! ```

pub mod color;
pub mod declaration;
pub mod list;
pub mod resolved;
pub mod value;

pub use color::Rgb;
pub use declaration::{
    boolean_option, color_option, integer_option, number_option, percentage_option, OptionDeclaration, OptionKind,
    OptionSpec,
};
pub use list::OptionList;
pub use resolved::ResolvedOptions;
pub use value::OptionValue;
