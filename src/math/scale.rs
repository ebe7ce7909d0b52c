use crate::error::SketchError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default number of screen pixels per simulation unit
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 32.0;

/// Scale transform between screen pixels and simulation units.
///
/// Fixture geometry is authored in simulation units; bounds, anchors and
/// sprite cropping are computed in pixels. Both directions are a single
/// float multiply or divide with no rounding or clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PixelScale {
    pixels_per_unit: f32,
}

impl PixelScale {
    /// Creates a scale with the given pixels-per-unit ratio
    pub fn new(pixels_per_unit: f32) -> Result<Self> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(SketchError::InvalidParameter(format!(
                "pixels per unit must be finite and positive, got {}",
                pixels_per_unit
            )));
        }
        Ok(Self { pixels_per_unit })
    }

    /// Returns the pixels-per-unit ratio
    #[inline]
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Converts a pixel length to simulation units
    #[inline]
    pub fn to_sim(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit
    }

    /// Converts a simulation length to pixels
    #[inline]
    pub fn to_screen(&self, units: f32) -> f32 {
        units * self.pixels_per_unit
    }

    /// Converts a screen point to simulation space
    #[inline]
    pub fn point_to_sim(&self, point: Vector2) -> Vector2 {
        Vector2::new(self.to_sim(point.x), self.to_sim(point.y))
    }

    /// Converts a simulation point to screen space
    #[inline]
    pub fn point_to_screen(&self, point: Vector2) -> Vector2 {
        Vector2::new(self.to_screen(point.x), self.to_screen(point.y))
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self { pixels_per_unit: DEFAULT_PIXELS_PER_UNIT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_trip() {
        let scale = PixelScale::default();
        for x in [0.0f32, 1.0, -3.5, 100.0, 12345.678, -0.001] {
            assert_relative_eq!(scale.to_screen(scale.to_sim(x)), x, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_rejects_bad_ratio() {
        assert!(PixelScale::new(0.0).is_err());
        assert!(PixelScale::new(-1.0).is_err());
        assert!(PixelScale::new(f32::NAN).is_err());
        assert!(PixelScale::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_point_conversion() {
        let scale = PixelScale::new(10.0).unwrap();
        let p = scale.point_to_sim(Vector2::new(50.0, -20.0));
        assert_eq!(p, Vector2::new(5.0, -2.0));
        assert_eq!(scale.point_to_screen(p), Vector2::new(50.0, -20.0));
    }
}
