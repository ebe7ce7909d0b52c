use crate::core::config::{VELOCITY_ITERATIONS, POSITION_ITERATIONS};

/// Something that can advance a rigid-body simulation by one step.
///
/// `PhysicsWorld` implements this; a host with its own solver can too.
pub trait PhysicsStep {
    /// Advances the simulation by `dt` seconds
    fn step(&mut self, dt: f32, velocity_iterations: u32, position_iterations: u32);
}

/// Steps a simulation exactly once per rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    velocity_iterations: u32,
    position_iterations: u32,
}

impl SimulationClock {
    /// Creates a clock with the default iteration counts (8 velocity, 1 position)
    pub fn new() -> Self {
        Self::with_iterations(VELOCITY_ITERATIONS, POSITION_ITERATIONS)
    }

    /// Creates a clock with explicit iteration counts
    pub fn with_iterations(velocity_iterations: u32, position_iterations: u32) -> Self {
        Self {
            velocity_iterations,
            position_iterations,
        }
    }

    /// Returns the velocity iteration count
    pub fn velocity_iterations(&self) -> u32 {
        self.velocity_iterations
    }

    /// Returns the position iteration count
    pub fn position_iterations(&self) -> u32 {
        self.position_iterations
    }

    /// Advances `world` by `dt`. No sub-stepping and no catch-up: a long
    /// frame produces one long step.
    pub fn step<W: PhysicsStep + ?Sized>(&self, world: &mut W, dt: f32) {
        world.step(dt, self.velocity_iterations, self.position_iterations);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
