// Per-frame driver tying the selection pieces together
use bevy::prelude::*;

use super::box_select::resolve_box;
use super::click::resolve_click;
use super::config::SelectionConfig;
use super::frustum::FrustumCache;
use super::hover::HoverTracker;
use super::host::{
    CameraProjection, ObjectHandle, OverlayPainter, PointerInput, SpatialQuery, SurfaceHighlight,
};
use super::input::{DragRelease, DragTracker};
use super::state::SelectionSet;

/// How this frame's release changed the selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome<O> {
    /// Click picked this object, or nothing (selection emptied)
    Clicked(Option<O>),
    /// Marquee selected this many objects
    Boxed(usize),
}

/// Owns all selection state. The host calls [`update`](Self::update) once per
/// frame and [`render_overlay`](Self::render_overlay) from its draw pass.
#[derive(Debug)]
pub struct SelectionController<O> {
    config: SelectionConfig,
    frustum: FrustumCache,
    drag: DragTracker,
    selection: SelectionSet<O>,
    hover: HoverTracker<O>,
}

impl<O: ObjectHandle> SelectionController<O> {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            frustum: FrustumCache::default(),
            drag: DragTracker::new(config.click_threshold),
            selection: SelectionSet::new(config.selected_color),
            hover: HoverTracker::new(config.hover_color),
            config,
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Frustum refresh, then drag input (may resolve a click or box), then hover.
    pub fn update<C, S>(
        &mut self,
        pointer: &impl PointerInput,
        camera: &C,
        scene: &S,
        surfaces: &mut impl SurfaceHighlight<O>,
    ) -> Option<SelectionOutcome<O>>
    where
        C: CameraProjection + Sync,
        S: SpatialQuery<Object = O> + Sync,
    {
        let filter = self.config.filter;
        self.frustum.refresh(camera);

        let outcome = self
            .drag
            .update(pointer, camera.screen_size().y)
            .map(|release| match release {
                DragRelease::Click { pointer } => SelectionOutcome::Clicked(resolve_click(
                    pointer,
                    camera,
                    scene,
                    filter,
                    &mut self.selection,
                    surfaces,
                )),
                DragRelease::Box { rect } => SelectionOutcome::Boxed(resolve_box(
                    rect,
                    camera,
                    self.frustum.planes(),
                    scene,
                    filter,
                    &mut self.selection,
                    surfaces,
                )),
            });

        // Runs every frame, after any selection change above
        self.hover.update(
            pointer.pointer_position(),
            camera,
            scene,
            filter,
            &self.selection,
            surfaces,
        );

        outcome
    }

    /// Draw the live marquee while dragging
    pub fn render_overlay(&self, painter: &mut impl OverlayPainter) {
        if let Some(rect) = self.drag_rect() {
            painter.fill_rect(rect, self.config.selection_box_color);
        }
    }

    /// Forget objects that are no longer selectable and revert their colour.
    /// Despawned objects are expected to be ignored by `surfaces`.
    pub fn retain(
        &mut self,
        mut exists: impl FnMut(&O) -> bool,
        surfaces: &mut impl SurfaceHighlight<O>,
    ) {
        self.selection.retain(&mut exists, surfaces);
        self.hover
            .forget_if(|object| !exists(object), &self.selection, surfaces);
    }

    pub fn selected(&self) -> impl Iterator<Item = O> + '_ {
        self.selection.iter()
    }

    pub fn is_selected(&self, object: &O) -> bool {
        self.selection.contains(object)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn hovered(&self) -> Option<O> {
        self.hover.target()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Live marquee in top-left coordinates, `None` when idle
    pub fn drag_rect(&self) -> Option<Rect> {
        self.drag.is_dragging().then(|| self.drag.state().rect)
    }
}
