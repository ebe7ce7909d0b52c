use crate::math::{Vector2, Aabb, Transform};
use crate::shapes::{Circle, OrientedBox, Edge};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Collision geometry attached to a body through a fixture
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A disc offset from the body origin
    Circle(Circle),

    /// A rotated rectangle offset from the body origin
    OrientedBox(OrientedBox),

    /// A two-sided segment with no area
    Edge(Edge),
}

impl Shape {

    /// Returns the area of the shape
    pub fn area(&self) -> f32 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::OrientedBox(obb) => obb.area(),
            Shape::Edge(_) => 0.0,
        }
    }

    /// Returns the area-weighted centroid in body-local space
    pub fn local_centroid(&self) -> Vector2 {
        match self {
            Shape::Circle(circle) => circle.center,
            Shape::OrientedBox(obb) => obb.center,
            Shape::Edge(edge) => edge.start.midpoint(&edge.end),
        }
    }

    /// Returns the axis-aligned bounds of the shape in world space
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.world_bounds(transform),
            Shape::OrientedBox(obb) => obb.world_bounds(transform),
            Shape::Edge(edge) => edge.world_bounds(transform),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<OrientedBox> for Shape {
    fn from(obb: OrientedBox) -> Self {
        Shape::OrientedBox(obb)
    }
}

impl From<Edge> for Shape {
    fn from(edge: Edge) -> Self {
        Shape::Edge(edge)
    }
}
