use image::RgbaImage;

use crate::bodies::RigidBody;
use crate::core::{BodyHandle, PhysicsWorld};
use crate::drawing::{RasterImage, ScreenRect};
use crate::math::{PixelScale, Vector2};
use crate::Result;

/// Where a body sprite should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritePose {
    /// Screen position of the anchor point, Y up
    pub position: Vector2,

    /// Counter-clockwise rotation in radians
    pub rotation: f32,
}

impl SpritePose {
    /// Rotation for scene graphs that rotate clockwise in degrees
    pub fn rotation_degrees_clockwise(&self) -> f32 {
        -self.rotation.to_degrees()
    }
}

/// A texture cut from a stroke's ink, bound to the body built from it
#[derive(Debug, Clone)]
pub struct BodySprite {
    body: BodyHandle,
    texture: RgbaImage,
    source_rect: ScreenRect,
    anchor: Vector2,
    scale: PixelScale,
    visible: bool,
}

impl BodySprite {
    /// The body driving this sprite
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// Cropped ink
    pub fn texture(&self) -> &RgbaImage {
        &self.texture
    }

    /// Region of the stroke target the texture was cut from (top-left origin)
    pub fn source_rect(&self) -> ScreenRect {
        self.source_rect
    }

    /// Anchor within the sprite, normalized to 0..1 on both axes with Y up
    pub fn anchor(&self) -> Vector2 {
        self.anchor
    }

    /// Whether the host should draw this sprite
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the sprite
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Current pose of the sprite, read from its body
    pub fn pose(&self, world: &PhysicsWorld) -> Result<SpritePose> {
        let transform = world.get_transform(self.body)?;
        Ok(SpritePose {
            position: self.scale.point_to_screen(transform.position),
            rotation: transform.angle,
        })
    }
}

/// Cuts body sprites out of a finished stroke's target
#[derive(Debug, Clone, Copy)]
pub struct BodySpriteFactory {
    scale: PixelScale,
    viewport_height: f32,
    brush_radius: f32,
}

impl BodySpriteFactory {
    /// Creates a factory for a viewport of the given pixel height
    pub fn new(scale: PixelScale, viewport_height: f32, brush_radius: f32) -> Self {
        Self {
            scale,
            viewport_height,
            brush_radius,
        }
    }

    /// Crops `raster` to `bounds` (padded by the brush radius) and anchors the
    /// result on the body's origin so it turns about the same point as the body
    pub fn create(
        &self,
        handle: BodyHandle,
        body: &RigidBody,
        bounds: ScreenRect,
        raster: &RasterImage,
    ) -> BodySprite {
        let rect = bounds.inflate_min_edges(self.brush_radius);
        let texture = raster.crop(&rect);

        let body_screen = self.scale.point_to_screen(body.get_position());
        let anchor = Vector2::new(
            (body_screen.x - rect.x) / rect.width,
            (body_screen.y + rect.y + rect.height - self.viewport_height) / rect.height,
        );

        log::trace!("sprite for {:?}: rect {:?}, anchor {}", handle, rect, anchor);

        BodySprite {
            body: handle,
            texture,
            source_rect: rect,
            anchor,
            scale: self.scale,
            visible: true,
        }
    }
}
