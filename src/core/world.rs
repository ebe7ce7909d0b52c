use crate::core::{BodyHandle, BodyStorage, PhysicsStep, SimulationConfig};
use crate::bodies::{RigidBody, RigidBodyType};
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::math::Transform;
use crate::error::SketchError;
use crate::Result;

/// Iteration counts and duration of the most recent step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub dt: f32,
    pub velocity_iterations: u32,
    pub position_iterations: u32,
}

/// Owns every body and advances them under gravity.
///
/// Stands in for the host's rigid-body engine: bodies are integrated but
/// contacts are not resolved.
pub struct PhysicsWorld {
    /// All rigid bodies in the world
    bodies: BodyStorage<RigidBody>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Integration scheme for dynamic bodies
    integrator: Box<dyn Integrator>,

    /// The total elapsed simulation time
    time: f32,

    last_step: Option<StepInfo>,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            config,
            integrator: Box::new(SymplecticEulerIntegrator::new()),
            time: 0.0,
            last_step: None,
        }
    }

    /// Replaces the integrator
    pub fn set_integrator(&mut self, integrator: Box<dyn Integrator>) {
        log::debug!("integrator {} replaced by {}", self.integrator.name(), integrator.name());
        self.integrator = integrator;
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }




    /// Returns what the last call to `step` was asked to do
    pub fn last_step(&self) -> Option<StepInfo> {
        self.last_step
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        log::trace!("added body {:?}", handle);
        handle
    }

    /// Removes a rigid body from the world
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        let body = self.bodies
            .remove(handle)
            .ok_or_else(|| SketchError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))?;
        log::trace!("removed body {:?}", handle);
        Ok(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Gets the transform of a rigid body
    pub fn get_transform(&self, handle: BodyHandle) -> Result<Transform> {
        Ok(self.bodies.get_body(handle)?.get_transform())
    }

    /// Iterates over every body with its handle
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter()
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsStep for PhysicsWorld {
    fn step(&mut self, dt: f32, velocity_iterations: u32, position_iterations: u32) {
        let gravity = self.config.gravity;

        for (_, body) in self.bodies.iter_mut() {
            if body.get_body_type() != RigidBodyType::Dynamic {
                continue;
            }

            body.apply_force(gravity * body.get_mass());
            body.apply_damping(self.config.linear_damping, self.config.angular_damping);
            self.integrator.integrate(body, dt);
        }

        self.time += dt;
        self.last_step = Some(StepInfo {
            dt,
            velocity_iterations,
            position_iterations,
        });
    }
}
