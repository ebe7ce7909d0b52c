pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod integration;
pub mod drawing;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, SimulationConfig, LayerConfig, Viewport, SimulationClock, PhysicsStep, BodyHandle};
pub use crate::bodies::{RigidBody, RigidBodyType, Fixture, Material};
pub use crate::drawing::{
    Brush, RasterImage, StrokeCapture, CapturedStroke, ShapeBuilder, BoundsCalculator, ScreenRect,
    BodySprite, BodySpriteFactory, SpritePose, DrawingLayer, GestureHandler, TouchId,
};
pub use crate::math::{Vector2, PixelScale};

/// Error types for stroke capture and body construction
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SketchError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Cannot allocate a {width}x{height} render target")]
        RenderTarget { width: u32, height: u32 },

        #[error("Image error: {0}")]
        Image(#[from] image::ImageError),
    }
}

/// Result type for sketch-physics operations
pub type Result<T> = std::result::Result<T, error::SketchError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
