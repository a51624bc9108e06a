// Bevy implementations of the selection host traits
use bevy::math::{Affine3A, Ray3d};
use bevy::prelude::*;
use bevy::render::primitives::{Aabb, Frustum};
use std::collections::HashMap;

use crate::math_utils::ray_aabb_intersection;
use crate::selection::{
    CameraProjection, FrustumPlanes, OverlayPainter, PointerInput, RayHit, ScreenPoint,
    SelectionLayers, SpatialQuery, SurfaceHighlight, WorldAabb,
};
use crate::types::{BoxSelectionVisual, HighlightSurfaces};

/// Left mouse button and cursor for one frame
pub struct MousePointer {
    /// Bottom-left origin, logical pixels
    pub position: Vec2,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl PointerInput for MousePointer {
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

/// Where a camera sits, how it projects and which part of the window it draws to.
///
/// Screen space is the camera's viewport with a bottom-left origin, logical
/// pixels. Window coordinates (cursor, UI) are top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProjection {
    pub world_from_view: Affine3A,
    pub clip_from_view: Mat4,
    /// Logical viewport inside the window, top-left origin
    pub viewport: Rect,
}

impl ViewProjection {
    pub fn from_camera(camera: &Camera, transform: &GlobalTransform) -> Option<Self> {
        Some(Self {
            world_from_view: transform.affine(),
            clip_from_view: camera.clip_from_view(),
            viewport: camera.logical_viewport_rect()?,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.viewport.size()
    }

    /// Window cursor position to screen space
    pub fn window_to_screen(&self, cursor: Vec2) -> Vec2 {
        let local = cursor - self.viewport.min;
        Vec2::new(local.x, self.size().y - local.y)
    }

    /// Top-left viewport rect to window coordinates
    pub fn rect_to_window(&self, rect: Rect) -> Rect {
        Rect::from_corners(rect.min + self.viewport.min, rect.max + self.viewport.min)
    }

    pub fn world_to_screen(&self, world: Vec3) -> ScreenPoint {
        let view = self.world_from_view.inverse().transform_point3(world);
        let clip = self.clip_from_view * view.extend(1.0);

        // On or behind the eye plane there is no meaningful screen position
        if clip.w <= f32::EPSILON {
            return ScreenPoint {
                position: Vec2::ZERO,
                depth: (-view.z).min(-f32::EPSILON),
            };
        }

        let ndc = clip.truncate() / clip.w;
        ScreenPoint {
            position: (ndc.truncate() + Vec2::ONE) * 0.5 * self.size(),
            // Bevy cameras look down -Z
            depth: -view.z,
        }
    }

    pub fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray3d> {
        let size = self.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }

        let ndc = screen / size * 2.0 - Vec2::ONE;
        let view_from_clip = self.clip_from_view.inverse();
        // Two finite depths work for reverse-z, forward-z and orthographic alike
        let a = view_from_clip.project_point3(ndc.extend(1.0));
        let b = view_from_clip.project_point3(ndc.extend(0.5));
        let (near, far) = if a.z >= b.z { (a, b) } else { (b, a) };
        let along = far - near;
        if along.z >= -f32::EPSILON {
            return None;
        }

        // Start on the eye plane so nothing in front of the camera is skipped
        let origin = near - along * (near.z / along.z);
        let direction = Dir3::new(self.world_from_view.transform_vector3(along)).ok()?;
        Some(Ray3d::new(self.world_from_view.transform_point3(origin), direction))
    }
}

pub struct ViewCamera<'a> {
    pub projection: ViewProjection,
    pub frustum: &'a Frustum,
}

impl CameraProjection for ViewCamera<'_> {
    fn screen_size(&self) -> Vec2 {
        self.projection.size()
    }

    fn screen_point_to_ray(&self, screen: Vec2) -> Option<Ray3d> {
        self.projection.screen_point_to_ray(screen)
    }

    fn world_to_screen(&self, world: Vec3) -> ScreenPoint {
        self.projection.world_to_screen(world)
    }

    fn frustum_planes(&self) -> FrustumPlanes {
        FrustumPlanes::from_normal_d(self.frustum.half_spaces.map(|half_space| half_space.normal_d()))
    }
}

/// World-space box around a local `Aabb` under `transform`
pub fn world_bounds(aabb: &Aabb, transform: &GlobalTransform) -> WorldAabb {
    let local = WorldAabb::new(Vec3::from(aabb.center), Vec3::from(aabb.half_extents));
    let corners = local.corners().map(|corner| transform.transform_point(corner));
    WorldAabb::from_points(corners).unwrap_or(local)
}

struct IndexedObject {
    entity: Entity,
    bounds: WorldAabb,
    layers: SelectionLayers,
}

/// Flat index of every selectable entity's world bounds, rebuilt each frame
#[derive(Default)]
pub struct SceneIndex {
    objects: Vec<IndexedObject>,
    lookup: HashMap<Entity, usize>,
}

impl SceneIndex {
    pub fn build(entries: impl IntoIterator<Item = (Entity, SelectionLayers, WorldAabb)>) -> Self {
        let mut index = Self::default();
        for (entity, layers, bounds) in entries {
            index.lookup.insert(entity, index.objects.len());
            index.objects.push(IndexedObject { entity, bounds, layers });
        }
        index
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.lookup.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SpatialQuery for SceneIndex {
    type Object = Entity;

    fn raycast(&self, ray: Ray3d, max_distance: f32, filter: SelectionLayers) -> Option<RayHit<Entity>> {
        let mut nearest: Option<RayHit<Entity>> = None;

        for object in self.objects.iter().filter(|object| filter.intersects(object.layers)) {
            let Some(distance) = ray_aabb_intersection(
                ray.origin,
                *ray.direction,
                object.bounds.min(),
                object.bounds.max(),
            ) else {
                continue;
            };

            if distance > max_distance || nearest.is_some_and(|hit| hit.distance <= distance) {
                continue;
            }

            nearest = Some(RayHit {
                object: object.entity,
                point: ray.get_point(distance),
                distance,
            });
        }

        nearest
    }

    fn overlap_all(&self, filter: SelectionLayers) -> Vec<Entity> {
        self.objects
            .iter()
            .filter(|object| filter.intersects(object.layers))
            .map(|object| object.entity)
            .collect()
    }

    fn bounds(&self, object: Entity) -> Option<WorldAabb> {
        self.lookup.get(&object).map(|&i| self.objects[i].bounds)
    }
}

/// Writes highlight colours into each entity's own material instances
pub struct MaterialSurfaces<'a, 'w, 's> {
    pub surfaces: &'a Query<'w, 's, &'static HighlightSurfaces>,
    pub materials: &'a mut Assets<StandardMaterial>,
}

impl MaterialSurfaces<'_, '_, '_> {
    fn paint(&mut self, entity: Entity, color: impl Fn(Color) -> Color) {
        let Ok(highlight) = self.surfaces.get(entity) else { return };

        for (handle, default_color) in &highlight.surfaces {
            if let Some(material) = self.materials.get_mut(handle) {
                material.base_color = color(*default_color);
            }
        }
    }
}

impl SurfaceHighlight<Entity> for MaterialSurfaces<'_, '_, '_> {
    fn set_surface_color(&mut self, object: Entity, color: Color) {
        self.paint(object, |_| color);
    }

    fn reset_surface_color(&mut self, object: Entity) {
        self.paint(object, |default_color| default_color);
    }
}

/// Spawns the marquee as an absolutely positioned UI node
pub struct UiOverlay<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    /// Maps viewport rects to window space; `None` draws them unshifted
    pub view: Option<ViewProjection>,
}

impl OverlayPainter for UiOverlay<'_, '_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.view.map_or(rect, |view| view.rect_to_window(rect));
        self.commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(rect.min.x),
                top: Val::Px(rect.min.y),
                width: Val::Px(rect.width()),
                height: Val::Px(rect.height()),
                ..default()
            },
            BackgroundColor(color),
            BoxSelectionVisual,
        ));
    }
}
