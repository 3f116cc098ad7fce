use rayon::prelude::*;

use crate::{
    error::{FilterError, Result},
    filters::traits::{buffer_len, mix, to_channel, Filter, FilterInfo, CHANNELS},
    options::{color_option, integer_option, percentage_option, OptionList, ResolvedOptions, Rgb},
};

use super::{
    COL_COLOR, DEFAULT_COL_COLOR, DEFAULT_ROW_COLOR, DEFAULT_STRENGTH, DEFAULT_STRIPES, ROW_COLOR, STRENGTH, STRIPES,
};

/// Typed options for [`GridFilter`]
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Number of bands along each axis
    pub stripes: i64,
    /// Tint for the "on" horizontal bands
    pub row_color: Rgb,
    /// Tint for the "on" vertical bands
    pub col_color: Rgb,
    /// Blend weight in [0, 1]
    pub strength: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            stripes: DEFAULT_STRIPES,
            row_color: DEFAULT_ROW_COLOR,
            col_color: DEFAULT_COL_COLOR,
            strength: DEFAULT_STRENGTH / 100.0,
        }
    }
}

impl TryFrom<&ResolvedOptions> for GridOptions {
    type Error = FilterError;

    fn try_from(options: &ResolvedOptions) -> Result<Self> {
        Ok(Self {
            stripes: options.require_integer(STRIPES)?,
            row_color: options.require_color(ROW_COLOR)?,
            col_color: options.require_color(COL_COLOR)?,
            strength: options.require_fraction(STRENGTH)?,
        })
    }
}

/// Striping filter
///
/// Splits the image into `stripes` bands along each axis. Every odd row band
/// is blended toward `rowColor`, then every odd column band toward
/// `colColor`. Where the two overlap the column blend is computed from the
/// already row-blended pixel, so at full strength the column color wins.
pub struct GridFilter {
    options: OptionList,
}

impl GridFilter {
    pub fn new() -> Result<Self> {
        let options = OptionList::new(vec![
            integer_option(STRIPES, DEFAULT_STRIPES, Some(2), None)?,
            color_option(ROW_COLOR, DEFAULT_ROW_COLOR.to_string())?,
            color_option(COL_COLOR, DEFAULT_COL_COLOR.to_string())?,
            percentage_option(STRENGTH, DEFAULT_STRENGTH)?,
        ])?;
        Ok(Self { options })
    }
}

/// Whether `index` falls in an odd band of size `band` (which may be
/// fractional, or below one pixel).
///
/// Parity stays in `f64`: band indices past 2^53 are even, never saturated.
#[inline]
fn in_odd_band(index: usize, band: f64) -> bool {
    (index as f64 / band).floor() % 2.0 == 1.0
}

#[inline]
fn blend_toward(pixel: &mut [u8], target: [f64; 3], strength: f64) {
    for (channel, &t) in pixel[..3].iter_mut().zip(target.iter()) {
        *channel = to_channel(mix(*channel as f64, t, strength));
    }
}

impl FilterInfo for GridFilter {
    fn name(&self) -> &str {
        "Grid"
    }

    fn description(&self) -> &str {
        "Tints alternating horizontal and vertical bands toward two colors"
    }

    fn options(&self) -> &OptionList {
        &self.options
    }
}

impl Filter for GridFilter {
    type Options = GridOptions;

    fn apply<'a>(&self, pixels: &'a mut [u8], width: u32, height: u32, options: &GridOptions) -> &'a mut [u8] {
        debug_assert_eq!(buffer_len(width, height), Some(pixels.len()));
        if width == 0 || height == 0 {
            return pixels;
        }

        let stripes = options.stripes as f64;
        let stripe_width = width as f64 / stripes;
        let stripe_height = height as f64 / stripes;
        let row_color = options.row_color.channels().map(f64::from);
        let col_color = options.col_color.channels().map(f64::from);
        let strength = options.strength;

        pixels
            .par_chunks_mut(width as usize * CHANNELS)
            .enumerate()
            .for_each(|(row, line)| {
                let in_row_band = in_odd_band(row, stripe_height);
                for (col, pixel) in line.chunks_exact_mut(CHANNELS).enumerate() {
                    if in_row_band {
                        blend_toward(pixel, row_color, strength);
                    }
                    if in_odd_band(col, stripe_width) {
                        blend_toward(pixel, col_color, strength);
                    }
                }
            });

        pixels
    }
}
