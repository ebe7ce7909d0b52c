//! Stroke capture and the conversion of finished strokes into bodies and
//! sprites.

mod brush;
mod raster;
mod capture;
mod shape_builder;
mod bounds;
mod sprite;
mod layer;
pub mod debug;

pub use self::brush::Brush;
pub use self::raster::RasterImage;
pub use self::capture::{StrokeCapture, CapturedStroke};
pub use self::shape_builder::ShapeBuilder;
pub use self::bounds::{BoundsCalculator, ScreenRect};
pub use self::sprite::{BodySprite, BodySpriteFactory, SpritePose};
pub use self::layer::{DrawingLayer, GestureHandler, TouchId};
pub use self::debug::{DebugDrawFlags, DebugPrimitive};
