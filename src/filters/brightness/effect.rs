use rayon::prelude::*;

use crate::{
    error::{FilterError, Result},
    filters::traits::{buffer_len, to_channel, Filter, FilterInfo, CHANNELS},
    options::{boolean_option, number_option, OptionList, ResolvedOptions},
};

use super::{AMOUNT, INVERT};

/// Typed options for [`BrightnessFilter`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrightnessOptions {
    /// Shift in percent of full scale, -100..=100
    pub amount: f64,
    pub invert: bool,
}

impl TryFrom<&ResolvedOptions> for BrightnessOptions {
    type Error = FilterError;

    fn try_from(options: &ResolvedOptions) -> Result<Self> {
        Ok(Self {
            amount: options.require_number(AMOUNT)?,
            invert: options.require_bool(INVERT)?,
        })
    }
}

pub struct BrightnessFilter {
    options: OptionList,
}

impl BrightnessFilter {
    pub fn new() -> Result<Self> {
        let options = OptionList::new(vec![
            number_option(AMOUNT, 0.0, Some(-100.0), Some(100.0))?,
            boolean_option(INVERT, false)?,
        ])?;
        Ok(Self { options })
    }
}

impl FilterInfo for BrightnessFilter {
    fn name(&self) -> &str {
        "Brightness"
    }

    fn description(&self) -> &str {
        "Brightens or darkens the image, with optional color inversion"
    }

    fn options(&self) -> &OptionList {
        &self.options
    }
}

impl Filter for BrightnessFilter {
    type Options = BrightnessOptions;

    fn apply<'a>(&self, pixels: &'a mut [u8], width: u32, height: u32, options: &BrightnessOptions) -> &'a mut [u8] {
        debug_assert_eq!(buffer_len(width, height), Some(pixels.len()));

        let shift = options.amount / 100.0 * 255.0;
        let invert = options.invert;

        pixels.par_chunks_exact_mut(CHANNELS).for_each(|pixel| {
            for channel in &mut pixel[..3] {
                let shifted = to_channel(*channel as f64 + shift);
                *channel = if invert { 255 - shifted } else { shifted };
            }
        });

        pixels
    }
}
