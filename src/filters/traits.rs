use crate::{
    error::{FilterError, Result},
    options::{OptionList, ResolvedOptions},
};

/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// Descriptive surface of a filter, rendered by hosts when collecting options
pub trait FilterInfo {
    /// Display name of this filter
    fn name(&self) -> &str;

    /// Returns a human-readable description of this filter
    fn description(&self) -> &str;

    /// Declared options, in presentation order
    fn options(&self) -> &OptionList;
}

/// Core trait that all filters must implement
///
/// A filter is a pure transform over an RGBA buffer. It must be deterministic,
/// touch nothing but the buffer it is given, and keep no reference to it once
/// `apply` returns.
pub trait Filter: FilterInfo + Send + Sync {
    /// Typed options, read from a resolved option set that has already been
    /// checked against [`FilterInfo::options`].
    type Options: for<'r> TryFrom<&'r ResolvedOptions, Error = FilterError>;

    /// Transform `pixels` in place and hand the same buffer back.
    ///
    /// # Arguments
    ///
    /// * `pixels` - RGBA samples, row-major, top-to-bottom
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `options` - This filter's typed options
    ///
    /// The caller guarantees `pixels.len() == width * height * 4`.
    fn apply<'a>(&self, pixels: &'a mut [u8], width: u32, height: u32, options: &Self::Options) -> &'a mut [u8];
}

/// Object-safe form of [`Filter`] used by registries and pipelines.
///
/// Implemented for every [`Filter`]. This is the host-facing boundary: the
/// buffer geometry and the option set are both checked here, once, before
/// the per-pixel loop runs.
pub trait DynFilter: FilterInfo + Send + Sync {
    fn apply_resolved<'a>(
        &self,
        pixels: &'a mut [u8],
        width: u32,
        height: u32,
        options: &ResolvedOptions,
    ) -> Result<&'a mut [u8]>;
}

impl<F: Filter> DynFilter for F {
    fn apply_resolved<'a>(
        &self,
        pixels: &'a mut [u8],
        width: u32,
        height: u32,
        options: &ResolvedOptions,
    ) -> Result<&'a mut [u8]> {
        check_geometry(pixels.len(), width, height)?;
        self.options().validate(options)?;
        let typed = F::Options::try_from(options)?;
        Ok(self.apply(pixels, width, height, &typed))
    }
}

/// Byte length of a `width` x `height` RGBA buffer, or `None` if it overflows `usize`
pub fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// Check that a buffer of `len` bytes holds exactly `width` x `height` pixels
pub fn check_geometry(len: usize, width: u32, height: u32) -> Result<()> {
    let expected = buffer_len(width, height);
    if expected != Some(len) {
        return Err(FilterError::ShapeMismatch {
            len,
            width,
            height,
            expected,
        });
    }
    Ok(())
}

/// Weighted average of `a` and `b`, taking `weight_b` of `b`
#[inline]
pub fn mix(a: f64, b: f64, weight_b: f64) -> f64 {
    a * (1.0 - weight_b) + b * weight_b
}

/// Store a blend result into an 8-bit channel: clamp, then round half to even
#[inline]
pub fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_geometry() {
        assert!(check_geometry(64, 4, 4).is_ok());
        assert!(check_geometry(0, 0, 10).is_ok());
        assert!(matches!(
            check_geometry(63, 4, 4),
            Err(FilterError::ShapeMismatch { expected: Some(64), .. })
        ));
    }

    #[test]
    fn test_check_geometry_rejects_overflowing_dimensions() {
        assert!(matches!(
            check_geometry(0, 1 << 31, 1 << 31),
            Err(FilterError::ShapeMismatch { expected: None, .. })
        ));
        assert!(matches!(
            check_geometry(0, u32::MAX, u32::MAX),
            Err(FilterError::ShapeMismatch { expected: None, .. })
        ));
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(10.0, 200.0, 0.0), 10.0);
        assert_eq!(mix(10.0, 200.0, 1.0), 200.0);
        assert_eq!(mix(0.0, 100.0, 0.25), 25.0);
    }

    #[test]
    fn test_to_channel_clamps_and_rounds() {
        assert_eq!(to_channel(-4.0), 0);
        assert_eq!(to_channel(300.0), 255);
        assert_eq!(to_channel(12.5), 12);
        assert_eq!(to_channel(13.5), 14);
        assert_eq!(to_channel(12.6), 13);
    }
}
