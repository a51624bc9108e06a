// Selection systems: camera binding, surface preparation, per-frame update and overlay
use bevy::prelude::*;
use bevy::render::primitives::{Aabb, Frustum};
use bevy::window::PrimaryWindow;

use crate::types::*;

use super::adapters::{
    world_bounds, MaterialSurfaces, MousePointer, SceneIndex, UiOverlay, ViewCamera, ViewProjection,
};
use super::SelectionState;

/// System: Bind the camera tagged with `SelectionCamera`
pub fn bind_selection_camera(
    cameras: Query<Entity, (With<Camera>, Added<SelectionCamera>)>,
    mut selection_state: ResMut<SelectionState>,
) {
    let Some(camera) = cameras.iter().last() else { return };

    if selection_state.camera != Some(camera) {
        info!("Selection camera bound to {:?}", camera);
        selection_state.camera = Some(camera);
    }
}

/// System: Keep the bound camera's projection and viewport current
pub fn sync_selection_view(
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut selection_state: ResMut<SelectionState>,
) {
    let Some(camera_entity) = selection_state.camera else { return };
    let Ok((camera, transform)) = cameras.get(camera_entity) else { return };

    if let Some(view) = ViewProjection::from_camera(camera, transform) {
        selection_state.view = Some(view);
    }
}

/// System: Give each selectable its own material instances and remember their colours.
/// Covers the entity and all of its descendants. An entity stays pending (retried
/// every frame) until it has at least one material and all of them are loaded.
pub fn prepare_highlight_surfaces(
    mut commands: Commands,
    pending: Query<Entity, (With<Selectable>, Without<HighlightSurfaces>)>,
    children: Query<&Children>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in pending.iter() {
        let owners: Vec<(Entity, Handle<StandardMaterial>)> = std::iter::once(entity)
            .chain(children.iter_descendants(entity))
            .filter_map(|owner| {
                mesh_materials
                    .get(owner)
                    .ok()
                    .map(|material| (owner, material.0.clone()))
            })
            .collect();

        if owners.is_empty() || owners.iter().any(|(_, handle)| !materials.contains(handle)) {
            continue;
        }

        let mut surfaces = Vec::with_capacity(owners.len());
        for (owner, handle) in owners {
            let Some(material) = materials.get(&handle).cloned() else { continue };
            let default_color = material.base_color;
            let instance = materials.add(material);
            commands.entity(owner).insert(MeshMaterial3d(instance.clone()));
            surfaces.push((instance, default_color));
        }

        debug!("Prepared {} highlight surfaces for {:?}", surfaces.len(), entity);
        commands.entity(entity).insert(HighlightSurfaces { surfaces });
    }
}

/// System: Run one selection frame - frustum, drag input, click/box resolution, hover
pub fn selection_update_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    frusta: Query<&Frustum>,
    selectables: Query<(Entity, &Selectable, &Aabb, &GlobalTransform)>,
    surfaces: Query<&'static HighlightSurfaces>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut selection_state: ResMut<SelectionState>,
    mut selection_changed: EventWriter<SelectionChanged>,
) {
    let Some(camera_entity) = selection_state.camera else {
        bevy::log::warn_once!("No SelectionCamera bound; selection is inactive");
        return;
    };
    let Some(projection) = selection_state.view else { return };
    let Ok(frustum) = frusta.get(camera_entity) else { return };
    let Ok(window) = window_query.single() else { return };

    let state = &mut *selection_state;

    // Keep the last known position while the cursor is outside the window
    if let Some(cursor_pos) = window.cursor_position() {
        state.last_pointer = projection.window_to_screen(cursor_pos);
    }

    let pointer = MousePointer {
        position: state.last_pointer,
        just_pressed: mouse_button.just_pressed(MouseButton::Left),
        just_released: mouse_button.just_released(MouseButton::Left),
    };
    let view = ViewCamera { projection, frustum };
    let index = SceneIndex::build(
        selectables
            .iter()
            .map(|(entity, selectable, aabb, transform)| (entity, selectable.layers, world_bounds(aabb, transform))),
    );

    let mut highlight = MaterialSurfaces {
        surfaces: &surfaces,
        materials: &mut materials,
    };

    // No longer selectable: revert what is left of them, despawned ones are skipped
    state
        .controller
        .retain(|entity| index.contains(entity), &mut highlight);

    if state.controller.update(&pointer, &view, &index, &mut highlight).is_some() {
        selection_changed.write(SelectionChanged {
            selected: state.controller.selected().collect(),
        });
    }
}

/// System: Drop highlight bookkeeping from entities that lost `Selectable`.
/// Runs after the update system has reverted their colours.
pub fn release_highlight_surfaces(
    mut commands: Commands,
    mut removed: RemovedComponents<Selectable>,
    leftovers: Query<Entity, (With<HighlightSurfaces>, Without<Selectable>)>,
) {
    for entity in removed.read() {
        if leftovers.contains(entity) {
            commands.entity(entity).remove::<HighlightSurfaces>();
        }
    }
}

/// System: Render box selection rectangle during left-click drag
pub fn box_selection_visual_system(
    mut commands: Commands,
    selection_state: Res<SelectionState>,
    existing_visual: Query<Entity, With<BoxSelectionVisual>>,
) {
    // Despawn existing visual (recreated with the current rect below)
    for entity in existing_visual.iter() {
        commands.entity(entity).despawn();
    }

    selection_state.controller.render_overlay(&mut UiOverlay {
        commands: &mut commands,
        view: selection_state.view,
    });
}
