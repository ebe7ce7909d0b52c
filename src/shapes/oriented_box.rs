use crate::math::{Vector2, Aabb, Transform};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rectangle rotated about its own center, positioned relative to its body
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OrientedBox {
    /// Center in body-local simulation units
    pub center: Vector2,

    /// Half of the extent along the box's own x axis
    pub half_width: f32,

    /// Half of the extent along the box's own y axis
    pub half_height: f32,

    /// Rotation relative to the body, in radians
    pub angle: f32,
}

impl OrientedBox {
    /// Creates a new box from half extents, local center and angle
    pub fn new(half_width: f32, half_height: f32, center: Vector2, angle: f32) -> Self {
        Self {
            center,
            half_width: half_width.max(0.0),
            half_height: half_height.max(0.0),
            angle,
        }
    }

    /// Full width of the box
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Full height of the box
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Returns the area of the box
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns the 4 corners in body-local space, counter-clockwise
    pub fn local_vertices(&self) -> [Vector2; 4] {
        let frame = Transform::new(self.center, self.angle);
        let (x, y) = (self.half_width, self.half_height);

        [
            frame.transform_point(Vector2::new(-x, -y)),
            frame.transform_point(Vector2::new(x, -y)),
            frame.transform_point(Vector2::new(x, y)),
            frame.transform_point(Vector2::new(-x, y)),
        ]
    }

    /// Returns the 4 corners in world space
    pub fn world_vertices(&self, transform: &Transform) -> [Vector2; 4] {
        self.local_vertices().map(|v| transform.transform_point(v))
    }

    /// Returns the world-space bounds of the box
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        let mut bounds = Aabb::empty();
        for vertex in self.world_vertices(transform) {
            bounds.expand_to_include_point(vertex);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_aligned_vertices() {
        let b = OrientedBox::new(2.0, 1.0, Vector2::new(1.0, 1.0), 0.0);
        let v = b.local_vertices();
        assert_relative_eq!(v[0], Vector2::new(-1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(v[2], Vector2::new(3.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let b = OrientedBox::new(2.0, 0.5, Vector2::zero(), std::f32::consts::FRAC_PI_2);
        let bounds = b.world_bounds(&Transform::identity());
        assert_relative_eq!(bounds.min.x, -0.5, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(bounds.min.y, -2.0, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.y, 2.0, epsilon = 1e-5);
    }
}
