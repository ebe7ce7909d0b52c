use nalgebra as na;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid transformation in the plane (translation followed by rotation)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position of the origin
    pub position: Vector2,

    /// Counter-clockwise rotation in radians
    pub angle: f32,
}

impl Transform {
    /// Creates a new transform with the given position and angle
    #[inline]
    pub fn new(position: Vector2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Creates a new identity transform
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            angle: 0.0,
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self { position, angle: 0.0 }
    }

    /// Converts the transform to a nalgebra isometry
    #[inline]
    pub fn to_isometry(&self) -> na::Isometry2<f32> {
        na::Isometry2::new(self.position.to_nalgebra(), self.angle)
    }

    /// Transforms a point by this transform
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        Vector2::from_point(&self.to_isometry().transform_point(&point.to_point()))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
