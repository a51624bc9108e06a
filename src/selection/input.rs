// Pointer drag tracking: idle -> dragging -> click or box on release
use bevy::prelude::*;

use super::host::PointerInput;
use super::state::{DragPhase, DragState};

/// What a finished drag resolves to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// Pointer barely moved; pick under the release position
    Click { pointer: Vec2 },
    /// Marquee in top-left origin coordinates
    Box { rect: Rect },
}

/// Axis-aligned rect between two bottom-left pointer positions, flipped to top-left origin
pub fn drag_rect(origin: Vec2, current: Vec2, screen_height: f32) -> Rect {
    Rect::from_corners(
        Vec2::new(origin.x, screen_height - origin.y),
        Vec2::new(current.x, screen_height - current.y),
    )
}

#[inline]
pub fn is_click(rect: Rect, threshold: f32) -> bool {
    rect.width() < threshold && rect.height() < threshold
}

#[derive(Debug)]
pub struct DragTracker {
    state: DragState,
    click_threshold: f32,
}

impl DragTracker {
    pub fn new(click_threshold: f32) -> Self {
        Self {
            state: DragState::default(),
            click_threshold,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.phase == DragPhase::Dragging
    }

    /// Advance one frame. Returns the release classification on the frame the button comes up.
    pub fn update(&mut self, pointer: &impl PointerInput, screen_height: f32) -> Option<DragRelease> {
        let position = pointer.pointer_position();

        if pointer.button_just_pressed() {
            self.state.origin = position;
            self.state.phase = DragPhase::Dragging;
        }

        if self.state.phase != DragPhase::Dragging {
            return None;
        }

        self.state.rect = drag_rect(self.state.origin, position, screen_height);

        if !pointer.button_just_released() {
            return None;
        }

        self.state.phase = DragPhase::Idle;
        if is_click(self.state.rect, self.click_threshold) {
            Some(DragRelease::Click { pointer: position })
        } else {
            Some(DragRelease::Box { rect: self.state.rect })
        }
    }
}
