pub mod world;
pub mod config;
pub mod storage;
pub mod clock;

pub use self::world::{PhysicsWorld, StepInfo};
pub use self::config::{SimulationConfig, LayerConfig, Viewport, VELOCITY_ITERATIONS, POSITION_ITERATIONS};
pub use self::storage::BodyStorage;
pub use self::clock::{SimulationClock, PhysicsStep};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);
