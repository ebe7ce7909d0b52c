use crate::bodies::Material;
use crate::math::{Aabb, Transform};
use crate::shapes::Shape;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A shape attached to a body together with its surface material
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Fixture {
    shape: Shape,
    material: Material,
}

impl Fixture {
    /// Creates a new fixture from a shape and a material
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Returns the fixture's shape in body-local space
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the fixture's material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Mass contributed by this fixture
    pub fn mass(&self) -> f32 {
        self.shape.area() * self.material.density
    }

    /// World-space bounds under the owning body's transform
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        self.shape.world_bounds(transform)
    }
}
