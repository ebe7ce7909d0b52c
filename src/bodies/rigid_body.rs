use crate::bodies::{Fixture, RigidBodyType, ForceType};
use crate::math::{Vector2, Transform};

/// A 2D rigid body carrying a list of fixtures
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's transform in simulation space
    transform: Transform,

    /// The body's linear velocity
    linear_velocity: Vector2,

    /// The body's angular velocity in radians per second
    angular_velocity: f32,

    /// The body's type (dynamic or static)
    body_type: RigidBodyType,

    /// Fixtures in attachment order
    fixtures: Vec<Fixture>,

    /// Total mass of all fixtures
    mass: f32,

    /// Inverse of the body's mass (zero for non-dynamic bodies)
    inv_mass: f32,

    /// Center of mass in body-local space
    local_center: Vector2,

    /// Forces to be applied in the next integration step
    forces: Vec<ForceType>,
}

impl RigidBody {
    /// Creates a new fixture-less body of the given type. A dynamic body
    /// starts at unit mass until fixtures are attached.
    pub fn new(transform: Transform, body_type: RigidBodyType) -> Self {
        let mut body = Self {
            transform,
            linear_velocity: Vector2::zero(),
            angular_velocity: 0.0,
            body_type,
            fixtures: Vec::new(),
            mass: 0.0,
            inv_mass: 0.0,
            local_center: Vector2::zero(),
            forces: Vec::new(),
        };
        body.update_mass_properties();
        body
    }

    /// Creates a new dynamic body at the given position
    pub fn new_dynamic(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), RigidBodyType::Dynamic)
    }

    /// Creates a new static body at the given position
    pub fn new_static(position: Vector2) -> Self {
        Self::new(Transform::from_position(position), RigidBodyType::Static)
    }

    /// Attaches a fixture and refreshes the mass properties
    pub fn add_fixture(&mut self, fixture: Fixture) {
        self.fixtures.push(fixture);
        self.update_mass_properties();
    }

    /// Attaches several fixtures, recomputing the mass properties once
    pub fn add_fixtures<I: IntoIterator<Item = Fixture>>(&mut self, fixtures: I) {
        self.fixtures.extend(fixtures);
        self.update_mass_properties();
    }

    /// Returns the attached fixtures in attachment order
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Returns the body's transform
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    /// Sets the body's transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.transform.position
    }

    /// Returns the body's rotation in radians
    pub fn get_angle(&self) -> f32 {
        self.transform.angle
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, velocity: f32) {
        self.angular_velocity = velocity;
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the inverse mass
    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Center of mass in simulation space
    pub fn world_center_of_mass(&self) -> Vector2 {
        self.transform.transform_point(self.local_center)
    }

    /// Recomputes mass and center of mass from the fixtures
    pub fn update_mass_properties(&mut self) {
        self.mass = 0.0;
        self.inv_mass = 0.0;
        self.local_center = Vector2::zero();

        if self.body_type != RigidBodyType::Dynamic {
            return;
        }

        let mut weighted = Vector2::zero();
        for fixture in &self.fixtures {
            let mass = fixture.mass();
            self.mass += mass;
            weighted += fixture.shape().local_centroid() * mass;
        }

        if self.mass > 0.0 {
            self.inv_mass = 1.0 / self.mass;
            self.local_center = weighted / self.mass;
        } else {
            // massless dynamic bodies still need to fall
            self.mass = 1.0;
            self.inv_mass = 1.0;
        }
    }

    /// Queues a force through the center of mass
    pub fn apply_force(&mut self, force: Vector2) {
        if self.body_type == RigidBodyType::Dynamic {
            self.forces.push(ForceType::Force(force));
        }
    }

    /// Queues an impulse through the center of mass
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        if self.body_type == RigidBodyType::Dynamic {
            self.forces.push(ForceType::Impulse(impulse));
        }
    }

    /// Applies damping to the body's velocities
    pub fn apply_damping(&mut self, linear_damping: f32, angular_damping: f32) {
        if self.body_type != RigidBodyType::Dynamic {
            return;
        }

        let linear_factor = 1.0 - linear_damping.clamp(0.0, 1.0);
        self.linear_velocity *= linear_factor;

        let angular_factor = 1.0 - angular_damping.clamp(0.0, 1.0);
        self.angular_velocity *= angular_factor;
    }

    /// Integrates queued forces into velocities
    pub fn integrate_forces(&mut self, dt: f32) {
        if self.body_type != RigidBodyType::Dynamic {
            self.forces.clear();
            return;
        }

        for force in &self.forces {
            match *force {
                ForceType::Force(force) => {
                    self.linear_velocity += force * (self.inv_mass * dt);
                }
                ForceType::Impulse(impulse) => {
                    self.linear_velocity += impulse * self.inv_mass;
                }
            }
        }

        self.forces.clear();
    }

    /// Integrates velocities into the transform
    pub fn integrate_velocity(&mut self, dt: f32) {
        if self.body_type == RigidBodyType::Static {
            return;
        }

        self.transform.position += self.linear_velocity * dt;
        self.transform.angle += self.angular_velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Material;
    use crate::shapes::Circle;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_dynamic_body_has_unit_mass() {
        let mut body = RigidBody::new_dynamic(Vector2::zero());
        assert_eq!(body.get_mass(), 1.0);
        assert_eq!(body.get_inverse_mass(), 1.0);

        body.apply_impulse(Vector2::new(0.0, 3.0));
        body.integrate_forces(1.0);
        assert_eq!(body.get_linear_velocity(), Vector2::new(0.0, 3.0));
    }

    #[test]
    fn test_fresh_static_body_is_massless() {
        let body = RigidBody::new_static(Vector2::zero());
        assert_eq!(body.get_mass(), 0.0);
        assert_eq!(body.get_inverse_mass(), 0.0);
    }

    #[test]
    fn test_batch_attach_matches_one_by_one() {
        let fixtures: Vec<Fixture> = (0..5)
            .map(|i| Fixture::new(Circle::new(Vector2::new(i as f32, 0.0), 0.5), Material::default()))
            .collect();

        let mut one_by_one = RigidBody::new_dynamic(Vector2::zero());
        for fixture in &fixtures {
            one_by_one.add_fixture(*fixture);
        }
        let mut batched = RigidBody::new_dynamic(Vector2::zero());
        batched.add_fixtures(fixtures);

        assert_eq!(batched.fixtures(), one_by_one.fixtures());
        assert_relative_eq!(batched.get_mass(), one_by_one.get_mass());
        assert_relative_eq!(batched.world_center_of_mass(), Vector2::new(2.0, 0.0), epsilon = 1e-5);
    }
}
