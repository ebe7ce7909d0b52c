use bitflags::bitflags;

use crate::core::PhysicsWorld;
use crate::drawing::BoundsCalculator;
use crate::math::{PixelScale, Vector2};
use crate::shapes::Shape;

bitflags! {
    /// Which parts of the world the debug overlay draws
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DebugDrawFlags: u32 {
        /// Fixture outlines
        const SHAPES = 0x01;

        /// A marker at each dynamic body's center of mass
        const CENTER_OF_MASS = 0x02;

        /// Each body's axis-aligned bounds
        const AABB = 0x04;
    }
}

impl Default for DebugDrawFlags {
    fn default() -> Self {
        Self::SHAPES | Self::CENTER_OF_MASS
    }
}

/// A wireframe primitive in screen pixels (Y up)
#[derive(Debug, Clone, PartialEq)]
pub enum DebugPrimitive {
    Circle { center: Vector2, radius: f32 },
    Polygon(Vec<Vector2>),
    Segment { start: Vector2, end: Vector2 },
    Point(Vector2),
}

/// Collects wireframes for every body in `world`
pub fn debug_geometry(world: &PhysicsWorld, scale: PixelScale, flags: DebugDrawFlags) -> Vec<DebugPrimitive> {
    let mut out = Vec::new();

    for (_, body) in world.bodies() {
        let transform = body.get_transform();

        if flags.contains(DebugDrawFlags::SHAPES) {
            for fixture in body.fixtures() {
                let primitive = match fixture.shape() {
                    Shape::Circle(circle) => DebugPrimitive::Circle {
                        center: scale.point_to_screen(circle.world_center(&transform)),
                        radius: scale.to_screen(circle.radius),
                    },
                    Shape::OrientedBox(obb) => DebugPrimitive::Polygon(
                        obb.world_vertices(&transform)
                            .iter()
                            .map(|v| scale.point_to_screen(*v))
                            .collect(),
                    ),
                    Shape::Edge(edge) => {
                        let [start, end] = edge.world_vertices(&transform);
                        DebugPrimitive::Segment {
                            start: scale.point_to_screen(start),
                            end: scale.point_to_screen(end),
                        }
                    }
                };
                out.push(primitive);
            }
        }

        if flags.contains(DebugDrawFlags::CENTER_OF_MASS) && body.get_inverse_mass() > 0.0 {
            out.push(DebugPrimitive::Point(scale.point_to_screen(body.world_center_of_mass())));
        }

        if flags.contains(DebugDrawFlags::AABB) {
            if let Some(aabb) = BoundsCalculator::sim_bounds(body) {
                let min = scale.point_to_screen(aabb.min);
                let max = scale.point_to_screen(aabb.max);
                out.push(DebugPrimitive::Polygon(vec![
                    min,
                    Vector2::new(max.x, min.y),
                    max,
                    Vector2::new(min.x, max.y),
                ]));
            }
        }
    }

    out
}
