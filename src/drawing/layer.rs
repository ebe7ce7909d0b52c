use crate::bodies::{Fixture, Material, RigidBody};
use crate::core::{BodyHandle, LayerConfig, PhysicsWorld, SimulationClock};
use crate::drawing::debug::{debug_geometry, DebugDrawFlags, DebugPrimitive};
use crate::drawing::{
    BodySprite, BodySpriteFactory, BoundsCalculator, Brush, RasterImage, ShapeBuilder, StrokeCapture,
};
use crate::error::SketchError;
use crate::math::{PixelScale, Vector2};
use crate::shapes::Edge;
use crate::Result;

/// Identifier the host assigns to a touch
pub type TouchId = u64;

/// Callbacks a host engine drives a drawing layer with
pub trait GestureHandler {
    /// Called once per rendered frame
    fn on_frame(&mut self, dt: f32);

    /// A touch went down. Returns `Ok(false)` when the touch is not taken
    /// because another gesture is in progress.
    fn on_gesture_begin(&mut self, id: TouchId, point: Vector2) -> Result<bool>;

    /// The claimed touch moved from `from` to `to`
    fn on_gesture_extend(&mut self, id: TouchId, from: Vector2, to: Vector2);

    /// The claimed touch lifted; returns the body built from the stroke
    fn on_gesture_end(&mut self, id: TouchId) -> Result<BodyHandle>;

    /// The claimed touch was cancelled by the system
    fn on_gesture_cancel(&mut self, id: TouchId);
}

/// Scene layer where strokes drawn by the player become falling bodies
pub struct DrawingLayer {
    config: LayerConfig,
    scale: PixelScale,
    world: PhysicsWorld,
    clock: SimulationClock,
    brush: Brush,
    capture: StrokeCapture,
    sprites: Vec<BodySprite>,
    active_touch: Option<TouchId>,
    arena: Option<BodyHandle>,
    debug_enabled: bool,
    debug_flags: DebugDrawFlags,
}

impl DrawingLayer {
    /// Creates a layer, its world and, if configured, the arena walls
    pub fn new(config: LayerConfig, brush: Brush) -> Result<Self> {
        let scale = PixelScale::new(config.pixels_per_unit)?;
        let mut world = PhysicsWorld::with_config(config.simulation.clone());
        let clock = SimulationClock::with_iterations(
            config.simulation.velocity_iterations,
            config.simulation.position_iterations,
        );

        let arena = if config.arena_walls {
            Some(world.add_body(Self::arena_body(&config, scale)))
        } else {
            None
        };

        log::info!(
            "drawing layer {}x{} at {} px/unit, brush radius {}",
            config.viewport.width,
            config.viewport.height,
            scale.pixels_per_unit(),
            brush.radius()
        );

        Ok(Self {
            capture: StrokeCapture::new(config.viewport, config.max_target_pixels),
            config,
            scale,
            world,
            clock,
            brush,
            sprites: Vec::new(),
            active_touch: None,
            arena,
            debug_enabled: false,
            debug_flags: DebugDrawFlags::default(),
        })
    }

    /// Static body whose four edges enclose the viewport
    fn arena_body(config: &LayerConfig, scale: PixelScale) -> RigidBody {
        let w = scale.to_sim(config.viewport.width_f32());
        let h = scale.to_sim(config.viewport.height_f32());

        let mut body = RigidBody::new_static(Vector2::zero());
        let walls = [
            // bottom
            Edge::new(Vector2::new(0.0, 0.0), Vector2::new(w, 0.0)),
            // top
            Edge::new(Vector2::new(0.0, h), Vector2::new(w, h)),
            // left
            Edge::new(Vector2::new(0.0, h), Vector2::new(0.0, 0.0)),
            // right
            Edge::new(Vector2::new(w, h), Vector2::new(w, 0.0)),
        ];
        body.add_fixtures(walls.map(|wall| Fixture::new(wall, Material::boundary())));
        body
    }

    /// Layer configuration
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Pixel/simulation scale in use
    pub fn scale(&self) -> PixelScale {
        self.scale
    }

    /// The physics world
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Mutable access to the physics world
    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    /// The brush strokes are inked with
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Handle of the static arena, if walls were created
    pub fn arena(&self) -> Option<BodyHandle> {
        self.arena
    }

    /// Sprites of every drawn body, oldest first
    pub fn sprites(&self) -> &[BodySprite] {
        &self.sprites
    }

    /// The sprite bound to `body`
    pub fn sprite_for(&self, body: BodyHandle) -> Option<&BodySprite> {
        self.sprites.iter().find(|s| s.body() == body)
    }

    /// The touch currently drawing, if any
    pub fn active_touch(&self) -> Option<TouchId> {
        self.active_touch
    }

    /// Points of the stroke being drawn
    pub fn stroke_points(&self) -> &[Vector2] {
        self.capture.points()
    }

    /// Ink of the stroke being drawn; drawn regardless of debug mode
    pub fn stroke_preview(&self) -> Option<&RasterImage> {
        self.capture.raster()
    }

    /// Removes a drawn body and its sprite
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<()> {
        if Some(handle) == self.arena {
            return Err(SketchError::InvalidParameter(
                "the arena cannot be removed".to_string(),
            ));
        }
        self.world.remove_body(handle)?;
        self.sprites.retain(|s| s.body() != handle);
        Ok(())
    }

    /// Whether the debug overlay is on
    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Flips debug mode. While on, sprites are hidden and
    /// `debug_geometry` returns the wireframes that replace them.
    pub fn toggle_debug(&mut self) {
        self.debug_enabled = !self.debug_enabled;
        for sprite in &mut self.sprites {
            sprite.set_visible(!self.debug_enabled);
        }
        log::info!("debug draw {}", if self.debug_enabled { "on" } else { "off" });
    }

    /// Current overlay flags
    pub fn debug_flags(&self) -> DebugDrawFlags {
        self.debug_flags
    }

    /// Chooses what the overlay draws
    pub fn set_debug_flags(&mut self, flags: DebugDrawFlags) {
        self.debug_flags = flags;
    }

    /// Wireframes to draw this frame; empty unless debug mode is on
    pub fn debug_geometry(&self) -> Vec<DebugPrimitive> {
        if !self.debug_enabled {
            return Vec::new();
        }
        debug_geometry(&self.world, self.scale, self.debug_flags)
    }

    fn assert_active(&self, id: TouchId) {
        assert_eq!(
            self.active_touch,
            Some(id),
            "gesture event for touch {} which is not the active touch",
            id
        );
    }
}

impl GestureHandler for DrawingLayer {
    fn on_frame(&mut self, dt: f32) {
        self.clock.step(&mut self.world, dt);
    }

    fn on_gesture_begin(&mut self, id: TouchId, point: Vector2) -> Result<bool> {
        if let Some(active) = self.active_touch {
            log::warn!("ignoring touch {} while touch {} is drawing", id, active);
            return Ok(false);
        }

        self.capture.begin(point, &self.brush)?;
        self.active_touch = Some(id);
        Ok(true)
    }

    fn on_gesture_extend(&mut self, id: TouchId, from: Vector2, to: Vector2) {
        self.assert_active(id);
        self.capture.extend(from, to, &self.brush);
    }

    fn on_gesture_end(&mut self, id: TouchId) -> Result<BodyHandle> {
        self.assert_active(id);
        self.active_touch = None;

        // the target is dropped at the end of this call
        let stroke = self.capture.end();

        let builder = ShapeBuilder::for_brush(self.scale, &self.brush, self.config.material);
        let handle = builder.build_into(&mut self.world, &stroke.points)?;

        let viewport_height = self.config.viewport.height_f32();
        let body = self.world.get_body(handle)?;
        let bounds = BoundsCalculator::new(self.scale, viewport_height)
            .screen_bounds(body)
            .ok_or_else(|| SketchError::InvalidParameter(format!("body {:?} has no fixtures", handle)))?;

        let mut sprite = BodySpriteFactory::new(self.scale, viewport_height, self.brush.radius())
            .create(handle, body, bounds, &stroke.raster);
        if self.debug_enabled {
            sprite.set_visible(false);
        }
        self.sprites.push(sprite);

        Ok(handle)
    }

    fn on_gesture_cancel(&mut self, id: TouchId) {
        if self.active_touch != Some(id) {
            return;
        }
        self.capture.cancel();
        self.active_touch = None;
        log::debug!("touch {} cancelled, stroke discarded", id);
    }
}
