use image::{imageops, RgbaImage};

use crate::core::Viewport;
use crate::drawing::{Brush, ScreenRect};
use crate::error::SketchError;
use crate::math::Vector2;
use crate::Result;

/// Offscreen RGBA target that accumulates brush stamps for one stroke.
///
/// Points are given in screen space with Y up (the touch convention);
/// rows are stored top first, so a point at `y` lands on row `height - y`.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Allocates a transparent target covering the viewport.
    ///
    /// Fails instead of allocating when the viewport is empty or larger
    /// than `max_pixels`.
    pub fn new(viewport: Viewport, max_pixels: u64) -> Result<Self> {
        if viewport.width == 0 || viewport.height == 0 || viewport.pixel_count() > max_pixels {
            log::warn!(
                "refusing to allocate a {}x{} render target (limit {} pixels)",
                viewport.width,
                viewport.height,
                max_pixels
            );
            return Err(SketchError::RenderTarget {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            pixels: RgbaImage::new(viewport.width, viewport.height),
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The accumulated pixels
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Alpha-blends the brush centred on `at`
    pub fn stamp(&mut self, brush: &Brush, at: Vector2) {
        let row = self.pixels.height() as f32 - at.y;
        let left = (at.x - brush.width() / 2.0).round() as i64;
        let top = (row - brush.height() / 2.0).round() as i64;
        imageops::overlay(&mut self.pixels, brush.image(), left, top);
    }

    /// Stamps the brush along a straight segment, one stamp per pixel of
    /// travel (`round(distance) + 1` stamps including both ends)
    ///
    /// Only the part of the segment whose stamps can touch the target is
    /// walked; stamps that land are placed exactly as for the whole segment.
    pub fn stamp_line(&mut self, brush: &Brush, from: Vector2, to: Vector2) {
        let steps = from.distance(&to).round() as usize;
        let (t0, t1) = match self.visible_range(brush, from, to) {
            Some(range) => range,
            None => {
                log::trace!("segment from {} to {} misses the target", from, to);
                return;
            }
        };

        let (first, last) = if steps == 0 {
            (0, 0)
        } else {
            let first = ((t0 * steps as f32).floor() as usize).saturating_sub(1);
            let last = ((t1 * steps as f32).ceil() as usize + 1).min(steps);
            (first, last)
        };
        log::trace!(
            "stamping {} of {} brush images from {} to {}",
            last + 1 - first,
            steps + 1,
            from,
            to
        );

        for i in first..=last {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            self.stamp(brush, from.lerp(&to, t));
        }
    }

    /// Parameter range of `from -> to` along which a stamp overlaps the
    /// target, with a one pixel margin for rounding
    fn visible_range(&self, brush: &Brush, from: Vector2, to: Vector2) -> Option<(f32, f32)> {
        let margin_x = brush.width() / 2.0 + 1.0;
        let margin_y = brush.height() / 2.0 + 1.0;
        let min = Vector2::new(-margin_x, -margin_y);
        let max = Vector2::new(
            self.pixels.width() as f32 + margin_x,
            self.pixels.height() as f32 + margin_y,
        );
        let delta = to - from;

        // Liang-Barsky against the widened target
        let edges = [
            (-delta.x, from.x - min.x),
            (delta.x, max.x - from.x),
            (-delta.y, from.y - min.y),
            (delta.y, max.y - from.y),
        ];
        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }

    /// Copies the region under `rect` (top-left origin) into a new image of
    /// the rectangle's size. Parts of the rectangle outside the target stay
    /// transparent.
    pub fn crop(&self, rect: &ScreenRect) -> RgbaImage {
        let width = rect.width.round().max(1.0) as u32;
        let height = rect.height.round().max(1.0) as u32;
        let left = rect.x.round() as i64;
        let top = rect.y.round() as i64;

        let mut texture = RgbaImage::new(width, height);
        imageops::replace(&mut texture, &self.pixels, -left, -top);
        texture
    }

    /// Number of pixels with any ink on them
    pub fn inked_pixel_count(&self) -> usize {
        self.pixels.pixels().filter(|p| p[3] > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn brush() -> Brush {
        Brush::disc(2, Rgba([255, 0, 0, 255])).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_oversized_targets() {
        assert!(RasterImage::new(Viewport::new(0, 10), u64::MAX).is_err());
        assert!(RasterImage::new(Viewport::new(100, 100), 9_999).is_err());
        assert!(RasterImage::new(Viewport::new(100, 100), 10_000).is_ok());
    }

    #[test]
    fn test_stamp_flips_y() {
        let mut raster = RasterImage::new(Viewport::new(20, 20), u64::MAX).unwrap();
        raster.stamp(&brush(), Vector2::new(5.0, 15.0));
        // y = 15 from the bottom is row 5 from the top
        assert!(raster.pixels().get_pixel(5, 5)[3] > 0);
        assert_eq!(raster.pixels().get_pixel(5, 15)[3], 0);
    }

    #[test]
    fn test_stamp_line_leaves_no_gaps() {
        let mut raster = RasterImage::new(Viewport::new(64, 16), u64::MAX).unwrap();
        raster.stamp_line(&brush(), Vector2::new(4.0, 8.0), Vector2::new(60.0, 8.0));
        for x in 4..60 {
            assert!(raster.pixels().get_pixel(x, 8)[3] > 0, "gap at x = {}", x);
        }
    }

    #[test]
    fn test_segment_outside_target_leaves_it_blank() {
        let mut raster = RasterImage::new(Viewport::new(32, 32), u64::MAX).unwrap();
        raster.stamp_line(&brush(), Vector2::new(-50_000.0, -40.0), Vector2::new(50_000.0, -40.0));
        raster.stamp_line(&brush(), Vector2::new(100.0, 100.0), Vector2::new(100.0, 100.0));
        assert_eq!(raster.inked_pixel_count(), 0);
    }

    #[test]
    fn test_far_start_stamps_like_near_start() {
        let viewport = Viewport::new(100, 100);
        let mut far = RasterImage::new(viewport, u64::MAX).unwrap();
        let mut near = RasterImage::new(viewport, u64::MAX).unwrap();

        far.stamp_line(&brush(), Vector2::new(-10_000.0, 50.0), Vector2::new(50.0, 50.0));
        near.stamp_line(&brush(), Vector2::new(-20.0, 50.0), Vector2::new(50.0, 50.0));

        assert!(near.inked_pixel_count() > 0);
        assert_eq!(far.pixels(), near.pixels());
    }

    #[test]
    fn test_crossing_segment_is_stamped_inside() {
        let mut raster = RasterImage::new(Viewport::new(64, 16), u64::MAX).unwrap();
        raster.stamp_line(&brush(), Vector2::new(-5_000.0, 8.0), Vector2::new(5_000.0, 8.0));
        for x in 0..64 {
            assert!(raster.pixels().get_pixel(x, 8)[3] > 0, "gap at x = {}", x);
        }
    }

    #[test]
    fn test_crop_outside_target_is_transparent() {
        let mut raster = RasterImage::new(Viewport::new(10, 10), u64::MAX).unwrap();
        raster.stamp(&brush(), Vector2::new(1.0, 9.0));
        let texture = raster.crop(&ScreenRect::new(-4.0, -4.0, 8.0, 8.0));
        assert_eq!(texture.dimensions(), (8, 8));
        assert_eq!(texture.get_pixel(0, 0)[3], 0);
        // raster pixel (1, 1) shifts to (5, 5) in the crop
        assert_eq!(texture.get_pixel(5, 5), raster.pixels().get_pixel(1, 1));
    }
}
