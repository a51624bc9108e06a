// Axis-aligned world bounds and their screen-space footprint
use bevy::prelude::*;

use super::host::CameraProjection;

/// Axis-aligned bounding box in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldAabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl WorldAabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    /// Tightest box around a set of points, `None` when the set is empty
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// The 8 corners, one per sign combination of the extents
    pub fn corners(&self) -> [Vec3; 8] {
        let c = self.center;
        let e = self.half_extents;
        [
            c + Vec3::new(e.x, e.y, e.z),
            c + Vec3::new(-e.x, e.y, e.z),
            c + Vec3::new(e.x, -e.y, e.z),
            c + Vec3::new(-e.x, -e.y, e.z),
            c + Vec3::new(e.x, e.y, -e.z),
            c + Vec3::new(-e.x, e.y, -e.z),
            c + Vec3::new(e.x, -e.y, -e.z),
            c + Vec3::new(-e.x, -e.y, -e.z),
        ]
    }
}

/// Project the 8 corners of `bounds` and return the tightest enclosing screen rect,
/// in top-left origin coordinates (same convention as the drag rectangle).
///
/// Corners behind the camera are skipped, so a box straddling the near plane is
/// measured by its visible corners only. Returns `None` when every corner is
/// behind the camera; such an object has no screen footprint at all.
pub fn screen_rect_of_bounds(camera: &impl CameraProjection, bounds: &WorldAabb) -> Option<Rect> {
    let screen_height = camera.screen_size().y;
    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    let mut visible_corners = 0;

    for corner in bounds.corners() {
        let projected = camera.world_to_screen(corner);
        if projected.is_behind_camera() {
            continue;
        }

        // Flip to top-left origin
        let point = Vec2::new(projected.position.x, screen_height - projected.position.y);
        min = min.min(point);
        max = max.max(point);
        visible_corners += 1;
    }

    if visible_corners == 0 {
        return None;
    }

    Some(Rect { min, max })
}
