// Marquee selection - frustum reject, project bounds, overlap the drag rect
use bevy::prelude::*;
use rayon::prelude::*;

use crate::math_utils::rects_overlap;
use super::bounds::screen_rect_of_bounds;
use super::frustum::FrustumPlanes;
use super::host::{CameraProjection, SpatialQuery, SurfaceHighlight};
use super::layers::SelectionLayers;
use super::state::SelectionSet;

/// Whether `object` belongs in a marquee covering `rect` (top-left origin).
///
/// Objects outside the frustum are rejected before any projection, objects
/// with no corner in front of the camera have no screen rect and are rejected too.
pub fn is_in_selection<S: SpatialQuery>(
    object: S::Object,
    rect: Rect,
    camera: &impl CameraProjection,
    frustum: &FrustumPlanes,
    scene: &S,
) -> bool {
    let Some(bounds) = scene.bounds(object) else { return false };

    if !frustum.intersects_aabb(&bounds) {
        return false;
    }

    let Some(screen_rect) = screen_rect_of_bounds(camera, &bounds) else { return false };

    rects_overlap(rect, screen_rect)
}

/// Replace the selection with every filtered object whose projected bounds touch `rect`.
/// Returns the number of objects selected.
pub fn resolve_box<C, S>(
    rect: Rect,
    camera: &C,
    frustum: &FrustumPlanes,
    scene: &S,
    filter: SelectionLayers,
    selection: &mut SelectionSet<S::Object>,
    surfaces: &mut impl SurfaceHighlight<S::Object>,
) -> usize
where
    C: CameraProjection + Sync,
    S: SpatialQuery + Sync,
{
    let _span = bevy::log::info_span!("box_selection").entered();

    selection.clear(surfaces);

    let candidates = scene.overlap_all(filter);

    // Projection is read-only, so candidates are tested in parallel; colours are applied after
    let accepted: Vec<S::Object> = candidates
        .par_iter()
        .copied()
        .filter(|&object| is_in_selection(object, rect, camera, frustum, scene))
        .collect();

    for &object in &accepted {
        selection.add(object, surfaces);
    }

    info!(
        "Box selected {} of {} candidates",
        accepted.len(),
        candidates.len()
    );

    accepted.len()
}
