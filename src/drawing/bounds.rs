use crate::bodies::RigidBody;
use crate::math::{Aabb, PixelScale};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle in screen pixels with a top-left origin and Y
/// increasing downward
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Creates a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Moves the min-x and min-y edges out by `amount` and grows the size by
    /// the same `amount`. The max edges stay where they were.
    pub fn inflate_min_edges(&self, amount: f32) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount,
            height: self.height + amount,
        }
    }

    /// Right edge
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Computes the screen-space bounds of a body's fixtures
#[derive(Debug, Clone, Copy)]
pub struct BoundsCalculator {
    scale: PixelScale,
    viewport_height: f32,
}

impl BoundsCalculator {
    /// Creates a calculator for a viewport of the given pixel height
    pub fn new(scale: PixelScale, viewport_height: f32) -> Self {
        Self {
            scale,
            viewport_height,
        }
    }

    /// Simulation-space bounds of every fixture under the body's current
    /// transform, or `None` for a body without fixtures
    pub fn sim_bounds(body: &RigidBody) -> Option<Aabb> {
        let transform = body.get_transform();
        let mut bounds = Aabb::empty();

        for fixture in body.fixtures() {
            let fixture_bounds = fixture.world_bounds(&transform);
            bounds.expand_to_include_point(fixture_bounds.min);
            bounds.expand_to_include_point(fixture_bounds.max);
        }

        if bounds.is_empty() {
            None
        } else {
            Some(bounds)
        }
    }

    /// Screen-space bounds of the body, flipped so the origin is top-left
    pub fn screen_bounds(&self, body: &RigidBody) -> Option<ScreenRect> {
        let bounds = Self::sim_bounds(body)?;

        let min_x = self.scale.to_screen(bounds.min.x);
        let max_x = self.scale.to_screen(bounds.max.x);
        let min_y = self.scale.to_screen(bounds.min.y);
        let max_y = self.scale.to_screen(bounds.max.y);

        Some(ScreenRect::new(
            min_x,
            self.viewport_height - max_y,
            max_x - min_x,
            max_y - min_y,
        ))
    }
}
