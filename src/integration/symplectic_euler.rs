use crate::bodies::{RigidBody, RigidBodyType};
use crate::integration::Integrator;

/// Symplectic Euler integrator (semi-implicit Euler): velocities are
/// updated first and the new velocity moves the body.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&mut self, body: &mut RigidBody, dt: f32) {
        if body.get_body_type() == RigidBodyType::Static {
            return;
        }

        body.integrate_forces(dt);
        body.integrate_velocity(dt);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
