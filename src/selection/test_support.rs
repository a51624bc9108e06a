// Test doubles: an orthographic camera looking down -Z from the origin,
// a brute-force spatial index and a surface recorder
use bevy::math::{Dir3, Ray3d};
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::math_utils::ray_aabb_intersection;

pub use crate::constants::{HOVER_COLOR, SELECTED_COLOR, SELECTION_BOX_COLOR};
pub use super::bounds::WorldAabb;
pub use super::frustum::FrustumPlanes;
pub use super::host::*;
pub use super::layers::SelectionLayers;

pub const SCREEN_SIZE: Vec2 = Vec2::new(800.0, 600.0);
pub const PIXELS_PER_UNIT: f32 = 10.0;
pub const DEFAULT_SURFACE_COLOR: Color = Color::WHITE;

/// Bottom-left screen position of a world point (z ignored)
pub fn screen_of(world: Vec3) -> Vec2 {
    world.truncate() * PIXELS_PER_UNIT + SCREEN_SIZE * 0.5
}

/// View volume x in [-40, 40], y in [-30, 30], depth in [0.1, 1000]
pub fn ortho_frustum() -> FrustumPlanes {
    let half = SCREEN_SIZE * 0.5 / PIXELS_PER_UNIT;
    FrustumPlanes::from_normal_d([
        Vec4::new(1.0, 0.0, 0.0, half.x),
        Vec4::new(-1.0, 0.0, 0.0, half.x),
        Vec4::new(0.0, 1.0, 0.0, half.y),
        Vec4::new(0.0, -1.0, 0.0, half.y),
        Vec4::new(0.0, 0.0, -1.0, -0.1),
        Vec4::new(0.0, 0.0, 1.0, 1000.0),
    ])
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MockPointer {
    pub position: Vec2,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl MockPointer {
    pub fn hover(position: Vec2) -> Self {
        Self { position, ..default() }
    }

    pub fn press(position: Vec2) -> Self {
        Self { position, just_pressed: true, ..default() }
    }

    pub fn release(position: Vec2) -> Self {
        Self { position, just_released: true, ..default() }
    }
}

impl PointerInput for MockPointer {
    fn pointer_position(&self) -> Vec2 {
        self.position
    }

    fn button_just_pressed(&self) -> bool {
        self.just_pressed
    }

    fn button_just_released(&self) -> bool {
        self.just_released
    }
}

pub struct OrthoCamera {
    pub frustum: FrustumPlanes,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self { frustum: ortho_frustum() }
    }
}

impl CameraProjection for OrthoCamera {
    fn screen_size(&self) -> Vec2 {
        SCREEN_SIZE
    }

    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray3d> {
        let xy = (screen - SCREEN_SIZE * 0.5) / PIXELS_PER_UNIT;
        Some(Ray3d::new(xy.extend(0.0), Dir3::NEG_Z))
    }

    fn world_to_screen(&self, world: Vec3) -> ScreenPoint {
        ScreenPoint {
            position: screen_of(world),
            depth: -world.z,
        }
    }

    fn frustum_planes(&self) -> FrustumPlanes {
        self.frustum
    }
}

#[derive(Clone, Debug)]
pub struct MockObject {
    pub id: u32,
    pub bounds: WorldAabb,
    pub layers: SelectionLayers,
}

pub fn cube(id: u32, center: Vec3, half_size: f32) -> MockObject {
    MockObject {
        id,
        bounds: WorldAabb::new(center, Vec3::splat(half_size)),
        layers: SelectionLayers::DEFAULT,
    }
}

#[derive(Default)]
pub struct MockScene {
    pub objects: Vec<MockObject>,
    overlap_calls: AtomicUsize,
}

impl MockScene {
    pub fn new(objects: Vec<MockObject>) -> Self {
        Self { objects, ..default() }
    }

    pub fn overlap_calls(&self) -> usize {
        self.overlap_calls.load(Ordering::Relaxed)
    }
}

impl SpatialQuery for MockScene {
    type Object = u32;

    fn raycast(&self, ray: Ray3d, max_distance: f32, filter: SelectionLayers) -> Option<RayHit<u32>> {
        self.objects
            .iter()
            .filter(|object| filter.intersects(object.layers))
            .filter_map(|object| {
                let distance = ray_aabb_intersection(
                    ray.origin,
                    *ray.direction,
                    object.bounds.min(),
                    object.bounds.max(),
                )?;
                (distance <= max_distance).then(|| RayHit {
                    object: object.id,
                    point: ray.get_point(distance),
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn overlap_all(&self, filter: SelectionLayers) -> Vec<u32> {
        self.overlap_calls.fetch_add(1, Ordering::Relaxed);
        self.objects
            .iter()
            .filter(|object| filter.intersects(object.layers))
            .map(|object| object.id)
            .collect()
    }

    fn bounds(&self, object: u32) -> Option<WorldAabb> {
        self.objects
            .iter()
            .find(|candidate| candidate.id == object)
            .map(|candidate| candidate.bounds)
    }
}

/// Records colour writes per object
#[derive(Default)]
pub struct MockSurfaces {
    colors: HashMap<u32, Color>,
    sets: HashMap<u32, usize>,
    resets: HashMap<u32, usize>,
    pub without_surface: HashSet<u32>,
}

impl MockSurfaces {
    pub fn color_of(&self, object: u32) -> Color {
        self.colors.get(&object).copied().unwrap_or(DEFAULT_SURFACE_COLOR)
    }

    pub fn set_count(&self, object: u32) -> usize {
        self.sets.get(&object).copied().unwrap_or(0)
    }

    pub fn reset_count(&self, object: u32) -> usize {
        self.resets.get(&object).copied().unwrap_or(0)
    }
}

impl SurfaceHighlight<u32> for MockSurfaces {
    fn set_surface_color(&mut self, object: u32, color: Color) {
        if self.without_surface.contains(&object) {
            return;
        }
        self.colors.insert(object, color);
        *self.sets.entry(object).or_insert(0) += 1;
    }

    fn reset_surface_color(&mut self, object: u32) {
        if self.without_surface.contains(&object) {
            return;
        }
        self.colors.remove(&object);
        *self.resets.entry(object).or_insert(0) += 1;
    }
}

#[derive(Default)]
pub struct RecordingPainter {
    pub rects: Vec<(Rect, Color)>,
}

impl OverlayPainter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }
}
