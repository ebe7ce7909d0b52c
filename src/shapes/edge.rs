use crate::math::{Vector2, Aabb, Transform};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A line segment shape, used for static boundaries
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge {
    /// First endpoint in body-local simulation units
    pub start: Vector2,

    /// Second endpoint in body-local simulation units
    pub end: Vector2,
}

impl Edge {
    /// Creates a new edge between two local points
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }


    /// Returns both endpoints in world space
    pub fn world_vertices(&self, transform: &Transform) -> [Vector2; 2] {
        [
            transform.transform_point(self.start),
            transform.transform_point(self.end),
        ]
    }

    /// Returns the world-space bounds of the edge
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        let [a, b] = self.world_vertices(transform);
        Aabb::new(a.min(&b), a.max(&b))
    }
}
