// Bevy binding for the selection core
//
// Submodules:
// - adapters: Host trait implementations over Bevy cameras, bounds, materials and UI
// - systems: Camera binding, surface preparation and release, per-frame update and overlay

mod adapters;
mod systems;

use bevy::prelude::*;

use crate::selection::{SelectionConfig, SelectionController};
use crate::types::SelectionChanged;

pub use adapters::{
    world_bounds, MaterialSurfaces, MousePointer, SceneIndex, UiOverlay, ViewCamera, ViewProjection,
};
pub use systems::{
    bind_selection_camera, box_selection_visual_system, prepare_highlight_surfaces,
    release_highlight_surfaces, selection_update_system, sync_selection_view,
};

/// Selection state resource - the controller plus the camera it works through
#[derive(Resource)]
pub struct SelectionState {
    pub controller: SelectionController<Entity>,
    pub camera: Option<Entity>,
    /// Projection of the bound camera as of this frame
    pub view: Option<ViewProjection>,
    /// Bottom-left origin, logical pixels
    pub last_pointer: Vec2,
}

impl SelectionState {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            controller: SelectionController::new(config),
            camera: None,
            view: None,
            last_pointer: Vec2::ZERO,
        }
    }
}

/// Click, marquee and hover selection for entities tagged `Selectable`,
/// seen through the camera tagged `SelectionCamera`.
#[derive(Default)]
pub struct SelectionPlugin {
    pub config: SelectionConfig,
}

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(SelectionState::new(self.config.clone()))
            .add_event::<SelectionChanged>()
            .add_systems(
                Update,
                (
                    bind_selection_camera,
                    sync_selection_view,
                    prepare_highlight_surfaces,
                    selection_update_system,
                    release_highlight_surfaces,
                    box_selection_visual_system,
                )
                    .chain(),
            );
    }
}
