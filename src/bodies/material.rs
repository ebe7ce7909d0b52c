#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Default density applied to drawn bodies
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Default friction applied to drawn bodies
pub const DEFAULT_FRICTION: f32 = 0.2;

/// Default restitution applied to drawn bodies
pub const DEFAULT_RESTITUTION: f32 = 0.1;

/// Material properties copied onto every fixture at creation time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Density per unit area
    pub density: f32,

    /// Coefficient of friction, 0-1
    pub friction: f32,

    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density,
            friction,
            restitution,
        }
    }

    /// Material for static boundaries: massless, default surface response
    pub fn boundary() -> Self {
        Self {
            density: 0.0,
            friction: DEFAULT_FRICTION,
            restitution: 0.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}
