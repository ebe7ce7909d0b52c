use crate::core::Viewport;
use crate::drawing::{Brush, RasterImage};
use crate::math::Vector2;
use crate::Result;

/// A finished gesture: the polyline in screen pixels and the inked target
#[derive(Debug, Clone)]
pub struct CapturedStroke {
    pub points: Vec<Vector2>,
    pub raster: RasterImage,
}

#[derive(Debug)]
enum CaptureState {
    Idle,
    Capturing {
        points: Vec<Vector2>,
        raster: RasterImage,
    },
}

/// Records one touch gesture at a time as a polyline and inks it into an
/// offscreen target.
///
/// Calls must arrive as `begin`, any number of `extend`, then `end`.
/// Anything else is a caller bug and panics.
#[derive(Debug)]
pub struct StrokeCapture {
    viewport: Viewport,
    max_target_pixels: u64,
    state: CaptureState,
}

impl StrokeCapture {
    /// Creates an idle capture whose targets cover `viewport`
    pub fn new(viewport: Viewport, max_target_pixels: u64) -> Self {
        Self {
            viewport,
            max_target_pixels,
            state: CaptureState::Idle,
        }
    }

    /// Returns true between `begin` and `end`
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    /// Points recorded so far; empty while idle
    pub fn points(&self) -> &[Vector2] {
        match &self.state {
            CaptureState::Capturing { points, .. } => points,
            CaptureState::Idle => &[],
        }
    }

    /// The in-progress target, if any
    pub fn raster(&self) -> Option<&RasterImage> {
        match &self.state {
            CaptureState::Capturing { raster, .. } => Some(raster),
            CaptureState::Idle => None,
        }
    }

    /// Starts a stroke at `point`.
    ///
    /// Returns an error and stays idle if the target cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics if a stroke is already being captured.
    pub fn begin(&mut self, point: Vector2, brush: &Brush) -> Result<()> {
        assert!(
            !self.is_capturing(),
            "StrokeCapture::begin called while a stroke is already in progress"
        );

        let mut raster = RasterImage::new(self.viewport, self.max_target_pixels)?;
        raster.stamp(brush, point);

        self.state = CaptureState::Capturing {
            points: vec![point],
            raster,
        };
        Ok(())
    }

    /// Inks the segment `from`→`to` and records `to`.
    ///
    /// # Panics
    ///
    /// Panics if no stroke is in progress.
    pub fn extend(&mut self, from: Vector2, to: Vector2, brush: &Brush) {
        match &mut self.state {
            CaptureState::Capturing { points, raster } => {
                raster.stamp_line(brush, from, to);
                points.push(to);
            }
            CaptureState::Idle => panic!("StrokeCapture::extend called without an active stroke"),
        }
    }

    /// Finishes the stroke, handing the points and target to the caller.
    ///
    /// # Panics
    ///
    /// Panics if no stroke is in progress.
    pub fn end(&mut self) -> CapturedStroke {
        match std::mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::Capturing { points, raster } => CapturedStroke { points, raster },
            CaptureState::Idle => panic!("StrokeCapture::end called without an active stroke"),
        }
    }

    /// Abandons the stroke in progress, dropping its points and target.
    /// Returns false if there was nothing to abandon.
    pub fn cancel(&mut self) -> bool {
        let was_capturing = self.is_capturing();
        self.state = CaptureState::Idle;
        was_capturing
    }
}
