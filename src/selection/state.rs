// Drag state and the authoritative selection set
use bevy::prelude::*;
use std::collections::HashSet;

use super::host::{ObjectHandle, SurfaceHighlight};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Screen-space drag: origin in bottom-left pointer coordinates,
/// `rect` normalized and flipped to top-left coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub origin: Vec2,
    pub rect: Rect,
    pub phase: DragPhase,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            phase: DragPhase::Idle,
        }
    }
}

/// Currently selected objects.
///
/// Colour always mirrors membership: `add` paints `selected_color`, `clear`
/// resets every member. Nothing else in the crate writes the selected colour.
#[derive(Debug)]
pub struct SelectionSet<O> {
    members: HashSet<O>,
    selected_color: Color,
}

impl<O: ObjectHandle> SelectionSet<O> {
    pub fn new(selected_color: Color) -> Self {
        Self {
            members: HashSet::new(),
            selected_color,
        }
    }

    pub fn contains(&self, object: &O) -> bool {
        self.members.contains(object)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = O> + '_ {
        self.members.iter().copied()
    }

    /// Revert every member to its default colour and empty the set
    pub fn clear(&mut self, surfaces: &mut impl SurfaceHighlight<O>) {
        for object in self.members.drain() {
            surfaces.reset_surface_color(object);
        }
    }

    pub fn add(&mut self, object: O, surfaces: &mut impl SurfaceHighlight<O>) {
        self.members.insert(object);
        surfaces.set_surface_color(object, self.selected_color);
    }

    /// Drop members failing `keep` and revert them to their default colour.
    /// Surfaces of despawned objects are expected to ignore the reset.
    pub fn retain(
        &mut self,
        mut keep: impl FnMut(&O) -> bool,
        surfaces: &mut impl SurfaceHighlight<O>,
    ) {
        self.members.retain(|object| {
            let kept = keep(object);
            if !kept {
                surfaces.reset_surface_color(*object);
            }
            kept
        });
    }
}
