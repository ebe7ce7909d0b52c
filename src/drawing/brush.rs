use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::SketchError;
use crate::Result;

/// The stamp image used to ink strokes.
///
/// Its footprint also sizes the collision geometry: the cap circles use
/// `radius()` and the segment boxes use `height()`.
#[derive(Debug, Clone)]
pub struct Brush {
    image: RgbaImage,
}

impl Brush {
    /// Wraps an existing RGBA image
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SketchError::InvalidParameter(
                "brush image must not be empty".to_string(),
            ));
        }
        Ok(Self { image })
    }

    /// Loads a brush from an image file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path.as_ref())?.to_rgba8();
        log::debug!(
            "loaded brush {} ({}x{})",
            path.as_ref().display(),
            image.width(),
            image.height()
        );
        Self::from_image(image)
    }

    /// Generates an anti-aliased disc of the given radius in pixels
    pub fn disc(radius: u32, color: Rgba<u8>) -> Result<Self> {
        if radius == 0 {
            return Err(SketchError::InvalidParameter(
                "brush radius must be at least one pixel".to_string(),
            ));
        }

        let size = radius * 2;
        let r = radius as f32;
        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            let coverage = (r - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
            let alpha = (f32::from(color[3]) * coverage).round() as u8;
            Rgba([color[0], color[1], color[2], alpha])
        });

        Self::from_image(image)
    }

    /// Half of the larger image dimension, in pixels
    pub fn radius(&self) -> f32 {
        self.image.width().max(self.image.height()) as f32 / 2.0
    }

    /// Image width in pixels
    pub fn width(&self) -> f32 {
        self.image.width() as f32
    }

    /// Image height in pixels
    pub fn height(&self) -> f32 {
        self.image.height() as f32
    }

    /// The stamp pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
