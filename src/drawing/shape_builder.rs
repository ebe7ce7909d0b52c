use crate::bodies::{Fixture, Material, RigidBody};
use crate::core::{BodyHandle, PhysicsWorld};
use crate::drawing::Brush;
use crate::error::SketchError;
use crate::math::{PixelScale, Vector2};
use crate::shapes::{Circle, OrientedBox};
use crate::Result;

/// Turns a drawn polyline into one dynamic body made of a chain of boxes
/// with a circle at each end.
#[derive(Debug, Clone, Copy)]
pub struct ShapeBuilder {
    scale: PixelScale,
    brush_radius: f32,
    brush_height: f32,
    material: Material,
}

impl ShapeBuilder {
    /// Creates a builder from explicit brush dimensions in pixels
    pub fn new(scale: PixelScale, brush_radius: f32, brush_height: f32, material: Material) -> Self {
        Self {
            scale,
            brush_radius,
            brush_height,
            material,
        }
    }

    /// Creates a builder sized to a brush image
    pub fn for_brush(scale: PixelScale, brush: &Brush, material: Material) -> Self {
        Self::new(scale, brush.radius(), brush.height(), material)
    }

    /// Builds a body for `points` (screen pixels) without adding it to a world.
    ///
    /// Points closer than the brush radius to the start of the current
    /// segment are merged into the next segment, except the last point,
    /// which always closes the chain.
    pub fn build(&self, points: &[Vector2]) -> Result<RigidBody> {
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(SketchError::InvalidParameter(
                    "cannot build a body from an empty stroke".to_string(),
                ))
            }
        };

        let origin = self.scale.point_to_sim(first);
        let mut fixtures = vec![self.cap(origin, first), self.cap(origin, last)];

        let last_index = points.len() - 1;
        let mut segment_start = first;
        for (index, &point) in points.iter().enumerate().skip(1) {
            if segment_start.distance(&point) < self.brush_radius && index != last_index {
                continue;
            }
            fixtures.push(self.segment(origin, segment_start, point));
            segment_start = point;
        }

        // mass properties are computed once for the whole chain
        let mut body = RigidBody::new_dynamic(origin);
        body.add_fixtures(fixtures);

        log::debug!(
            "new body from {} points ({} fixtures)",
            points.len(),
            body.fixtures().len()
        );
        Ok(body)
    }

    /// Builds a body for `points` and adds it to `world`
    pub fn build_into(&self, world: &mut PhysicsWorld, points: &[Vector2]) -> Result<BodyHandle> {
        let body = self.build(points)?;
        Ok(world.add_body(body))
    }

    fn cap(&self, origin: Vector2, at: Vector2) -> Fixture {
        let center = self.scale.point_to_sim(at) - origin;
        let radius = self.scale.to_sim(self.brush_radius);
        Fixture::new(Circle::new(center, radius), self.material)
    }

    fn segment(&self, origin: Vector2, start: Vector2, end: Vector2) -> Fixture {
        let length = start.distance(&end);
        let angle = (end - start).angle();
        let center = self.scale.point_to_sim(start.midpoint(&end)) - origin;

        let half_width = self.scale.to_sim(length) / 2.0;
        let half_height = self.scale.to_sim(self.brush_height) / 2.0;

        Fixture::new(
            OrientedBox::new(half_width, half_height, center, angle),
            self.material,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use approx::assert_relative_eq;

    fn builder() -> ShapeBuilder {
        ShapeBuilder::new(PixelScale::default(), 10.0, 20.0, Material::default())
    }

    fn boxes(body: &RigidBody) -> Vec<OrientedBox> {
        body.fixtures()
            .iter()
            .filter_map(|f| match f.shape() {
                Shape::OrientedBox(obb) => Some(*obb),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_stroke_is_rejected() {
        assert!(builder().build(&[]).is_err());
    }

    #[test]
    fn test_two_points_one_box() {
        let body = builder()
            .build(&[Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)])
            .unwrap();
        let boxes = boxes(&body);
        assert_eq!(body.fixtures().len(), 3);
        assert_eq!(boxes.len(), 1);
        assert_relative_eq!(boxes[0].width(), 100.0 / 32.0);
        assert_relative_eq!(boxes[0].height(), 20.0 / 32.0);
        assert_relative_eq!(boxes[0].center, Vector2::new(50.0 / 32.0, 0.0));
        assert_relative_eq!(boxes[0].angle, 0.0);
    }

    #[test]
    fn test_box_angle_follows_segment() {
        let body = builder()
            .build(&[Vector2::new(0.0, 0.0), Vector2::new(0.0, 64.0)])
            .unwrap();
        assert_relative_eq!(boxes(&body)[0].angle, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_close_tail_still_closes_the_chain() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 0.0),
            Vector2::new(53.0, 0.0),
        ];
        let boxes = boxes(&builder().build(&points).unwrap());
        assert_eq!(boxes.len(), 2);
        assert_relative_eq!(boxes[1].width(), 3.0 / 32.0, epsilon = 1e-6);
    }

    #[test]
    fn test_material_copied_to_every_fixture() {
        let material = Material::new(3.0, 0.4, 0.6);
        let builder = ShapeBuilder::new(PixelScale::default(), 10.0, 20.0, material);
        let body = builder
            .build(&[Vector2::new(0.0, 0.0), Vector2::new(40.0, 40.0), Vector2::new(90.0, 0.0)])
            .unwrap();
        assert!(body.fixtures().iter().all(|f| *f.material() == material));
    }

    #[test]
    fn test_long_stroke_mass_sums_fixtures() {
        let points: Vec<Vector2> = (0..500)
            .map(|i| Vector2::new(i as f32 * 12.0, (i as f32 * 0.3).sin() * 40.0))
            .collect();
        let body = builder().build(&points).unwrap();

        assert_eq!(body.fixtures().len(), 2 + 499);
        let total: f32 = body.fixtures().iter().map(|f| f.mass()).sum();
        assert_relative_eq!(body.get_mass(), total, max_relative = 1e-4);
        assert_relative_eq!(body.get_inverse_mass(), 1.0 / total, max_relative = 1e-4);
    }
}
