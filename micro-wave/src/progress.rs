use embedded_graphics::{
    geometry::Point,
    primitives::{ContainsPoint, Rectangle},
};

#[cfg(feature = "logging")]
use defmt::trace;

/// Converts a pointer x position inside a widget into progress in `[0, 1]`.
///
/// Positions left of the widget give `0.0`, positions past its right edge
/// give `1.0`. A widget with no usable width gives `0.0`.
pub fn pointer_to_progress(pointer_x: f32, bounding_left: f32, bounding_width: f32) -> f32 {
    if !(bounding_width.is_finite() && bounding_width > 0.0) {
        return 0.0;
    }
    let offset = pointer_x - bounding_left;
    let percentage = offset / bounding_width * 100.0;
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0) / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubState {
    /// Progress holds its last committed value.
    Idle,
    /// A pointer is held down over the widget; every move updates progress.
    Scrubbing,
}

/// Pointer-driven progress for a waveform widget.
///
/// Clicking and dragging share one code path: a press starts scrubbing and
/// commits a value, each move while pressed commits another. Event methods
/// return the new progress when it changed so the host knows to redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrubber {
    bounds: Rectangle,
    state: ScrubState,
    progress: f32,
}

impl Scrubber {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            state: ScrubState::Idle,
            progress: 0.0,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Commits a progress value from outside, e.g. a playback position.
    pub fn set_progress(&mut self, progress: f32) -> Option<f32> {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.commit(progress)
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<f32> {
        if !self.bounds.contains(point) {
            return None;
        }
        self.state = ScrubState::Scrubbing;
        self.commit(self.map(point))
    }

    /// Leaving the widget while pressed counts as a pointer leave.
    pub fn pointer_move(&mut self, point: Point) -> Option<f32> {
        if self.state != ScrubState::Scrubbing {
            return None;
        }
        if !self.bounds.contains(point) {
            self.pointer_leave();
            return None;
        }
        self.commit(self.map(point))
    }

    pub fn pointer_up(&mut self) {
        self.state = ScrubState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.state = ScrubState::Idle;
    }

    fn map(&self, point: Point) -> f32 {
        pointer_to_progress(
            point.x as f32,
            self.bounds.top_left.x as f32,
            self.bounds.size.width as f32,
        )
    }

    fn commit(&mut self, progress: f32) -> Option<f32> {
        if progress == self.progress {
            return None;
        }
        #[cfg(feature = "logging")]
        trace!("scrub: progress {} -> {}", self.progress, progress);
        self.progress = progress;
        Some(progress)
    }
}
