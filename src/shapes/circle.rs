use crate::math::{Vector2, Aabb, Transform};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circular collision shape, offset from its body's origin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center in body-local simulation units
    pub center: Vector2,

    /// Radius in simulation units
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given local center and radius
    pub fn new(center: Vector2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Returns the area of the circle
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Returns the center of the circle in world space
    pub fn world_center(&self, transform: &Transform) -> Vector2 {
        transform.transform_point(self.center)
    }

    /// Returns the world-space bounds of the circle
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        // Rotation does not change a circle's extent
        let half = Vector2::new(self.radius, self.radius);
        Aabb::from_center_half_extents(self.world_center(transform), half)
    }
}
