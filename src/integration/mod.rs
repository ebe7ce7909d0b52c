//! Per-body time integration used by [`PhysicsWorld`](crate::PhysicsWorld).

mod symplectic_euler;

pub use self::symplectic_euler::SymplecticEulerIntegrator;

use crate::bodies::RigidBody;

/// Advances one body's velocity and pose over a step.
///
/// The world queues gravity and applies damping before calling this, so an
/// implementation only has to consume the queued forces and move the body.
pub trait Integrator {
    fn integrate(&mut self, body: &mut RigidBody, dt: f32);

    /// Short name for logs
    fn name(&self) -> &str;
}
