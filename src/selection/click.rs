// Single-click picking: replace the selection with whatever is under the pointer
use bevy::prelude::*;

use super::host::{CameraProjection, SpatialQuery, SurfaceHighlight};
use super::layers::SelectionLayers;
use super::state::SelectionSet;

/// Nearest filtered object under a screen point, no distance limit
pub fn pick_at<S: SpatialQuery>(
    pointer: Vec2,
    camera: &impl CameraProjection,
    scene: &S,
    filter: SelectionLayers,
) -> Option<S::Object> {
    let ray = camera.screen_point_to_ray(pointer)?;
    scene.raycast(ray, f32::INFINITY, filter).map(|hit| hit.object)
}

/// Single-select semantics: a hit becomes the only member, a miss empties the selection
pub fn resolve_click<S: SpatialQuery>(
    pointer: Vec2,
    camera: &impl CameraProjection,
    scene: &S,
    filter: SelectionLayers,
    selection: &mut SelectionSet<S::Object>,
    surfaces: &mut impl SurfaceHighlight<S::Object>,
) -> Option<S::Object> {
    let hit = pick_at(pointer, camera, scene, filter);

    selection.clear(surfaces);

    match hit {
        Some(object) => {
            selection.add(object, surfaces);
            info!("Selected {:?}", object);
        }
        None => debug!("Click on empty space, selection cleared"),
    }

    hit
}
