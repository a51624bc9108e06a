// Narrow interfaces to the host engine
//
// The selection core never touches renderer, physics or camera state directly.
// Everything it needs goes through these traits; the Bevy binding lives in
// `crate::plugin`, the test doubles in `test_support`.

use bevy::math::Ray3d;
use bevy::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

use super::bounds::WorldAabb;
use super::frustum::FrustumPlanes;
use super::layers::SelectionLayers;

/// Opaque reference to a scene object. Selection only stores and compares these.
pub trait ObjectHandle: Copy + Eq + Hash + Debug + Send + Sync {}

impl<T: Copy + Eq + Hash + Debug + Send + Sync> ObjectHandle for T {}

/// A world point projected to screen space (bottom-left origin, pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub position: Vec2,
    /// Distance in front of the camera; negative behind it
    pub depth: f32,
}

impl ScreenPoint {
    #[inline]
    pub fn is_behind_camera(&self) -> bool {
        self.depth < 0.0
    }
}

/// Nearest hit reported by a ray query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit<O> {
    pub object: O,
    pub point: Vec3,
    pub distance: f32,
}

/// Pointer position and primary button edges for the current frame
pub trait PointerInput {
    /// Bottom-left origin screen position in pixels
    fn pointer_position(&self) -> Vec2;
    fn button_just_pressed(&self) -> bool;
    fn button_just_released(&self) -> bool;
}

/// The single camera selection works against
pub trait CameraProjection {
    /// Screen width and height in pixels
    fn screen_size(&self) -> Vec2;
    /// Ray from the camera through a bottom-left origin screen point
    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray3d>;
    fn world_to_screen(&self, world: Vec3) -> ScreenPoint;
    fn frustum_planes(&self) -> FrustumPlanes;
}

/// Ray and volume queries against the host's spatial index
pub trait SpatialQuery {
    type Object: ObjectHandle;

    /// Nearest object hit within `max_distance` that matches `filter`
    fn raycast(
        &self,
        ray: Ray3d,
        max_distance: f32,
        filter: SelectionLayers,
    ) -> Option<RayHit<Self::Object>>;

    /// Every object in the world matching `filter`
    fn overlap_all(&self, filter: SelectionLayers) -> Vec<Self::Object>;

    /// World-space bounds of an object, if it still has any
    fn bounds(&self, object: Self::Object) -> Option<WorldAabb>;
}

/// Highlight colour on every surface of an object. Objects without a surface ignore both calls.
pub trait SurfaceHighlight<O> {
    fn set_surface_color(&mut self, object: O, color: Color);
    fn reset_surface_color(&mut self, object: O);
}

/// Immediate-mode overlay drawing
pub trait OverlayPainter {
    /// `rect` uses top-left origin screen coordinates
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
