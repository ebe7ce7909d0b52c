use crate::bodies::Material;
use crate::math::{Vector2, DEFAULT_PIXELS_PER_UNIT};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Velocity iterations used by the per-frame step
pub const VELOCITY_ITERATIONS: u32 = 8;

/// Position iterations used by the per-frame step
pub const POSITION_ITERATIONS: u32 = 1;

/// Configuration parameters for the physics world
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Constant gravity acceleration in simulation units per second squared
    pub gravity: Vector2,

    /// The number of iterations to run for solving velocity constraints
    pub velocity_iterations: u32,

    /// The number of iterations to run for solving position constraints
    pub position_iterations: u32,

    /// Global damping factor for linear velocity
    pub linear_damping: f32,

    /// Global damping factor for angular velocity
    pub angular_damping: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, -9.8),
            velocity_iterations: VELOCITY_ITERATIONS,
            position_iterations: POSITION_ITERATIONS,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }
}

/// Size of the drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by the viewport
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Height as a float, for Y-flip arithmetic
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Width as a float
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Configuration for a drawing layer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LayerConfig {
    /// Screen pixels per simulation unit
    pub pixels_per_unit: f32,

    /// Size of the drawable area
    pub viewport: Viewport,

    /// Material copied onto every fixture of a drawn body
    pub material: Material,

    /// World settings
    pub simulation: SimulationConfig,

    /// Layer background colour as RGBA
    pub background: [u8; 4],

    /// Upper bound on the offscreen target size; larger viewports fail to begin a stroke
    pub max_target_pixels: u64,

    /// Whether to enclose the viewport with static walls
    pub arena_walls: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            viewport: Viewport::default(),
            material: Material::default(),
            simulation: SimulationConfig::default(),
            background: [0x00, 0x8F, 0xD8, 0xD8],
            max_target_pixels: 4096 * 4096,
            arena_walls: true,
        }
    }
}
