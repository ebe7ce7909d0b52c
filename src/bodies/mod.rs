mod rigid_body;
mod material;
mod fixture;

pub use self::rigid_body::RigidBody;
pub use self::material::{Material, DEFAULT_DENSITY, DEFAULT_FRICTION, DEFAULT_RESTITUTION};
pub use self::fixture::Fixture;

use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Moved by gravity, forces and the solver. Drawn strokes are always dynamic.
    Dynamic,

    /// Never moves; used for the arena walls
    Static,
}

/// Forces queued on a body until the next integration
#[derive(Debug, Clone, Copy)]
pub enum ForceType {
    /// Force applied at the center of mass
    Force(Vector2),

    /// Impulse applied at the center of mass
    Impulse(Vector2),
}
