use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::{
    error::{FilterError, Result},
    filters::{check_geometry, DynFilter},
    options::ResolvedOptions,
};

/// A decoded RGBA image
///
/// This is a simple wrapper around an RGBA image buffer. Its raw samples are
/// exactly the pixel buffer layout filters operate on.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbaImage,
}

impl Frame {
    /// Create a new frame from an RGBA image buffer
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba(color));
        Self { buffer }
    }

    /// Create a frame from raw RGBA bytes
    pub fn from_rgba_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_geometry(data.len(), width, height)?;
        ImageBuffer::from_raw(width, height, data)
            .map(|buffer| Self { buffer })
            .ok_or_else(|| FilterError::generic("RGBA buffer rejected by image container"))
    }

    /// Decode an image file, converting it to RGBA
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path)?;
        Ok(Self::new(image.to_rgba8()))
    }

    /// Encode the frame; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.buffer.save(path)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.buffer.put_pixel(x, y, Rgba(color));
    }

    /// Raw RGBA samples
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_raw()
    }

    /// Run `filter` over this frame in place
    pub fn apply_filter(&mut self, filter: &dyn DynFilter, options: &ResolvedOptions) -> Result<()> {
        let (width, height) = self.buffer.dimensions();
        filter.apply_resolved(&mut self.buffer, width, height, options)?;
        Ok(())
    }
}
