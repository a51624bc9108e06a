// Camera frustum planes, refreshed once per frame before box resolution
use bevy::prelude::*;

use super::bounds::WorldAabb;
use super::host::CameraProjection;

/// Six planes as `(normal, d)`; a point `p` is inside a plane when `normal.dot(p) + d >= 0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumPlanes {
    pub planes: [Vec4; 6],
}

impl FrustumPlanes {
    /// Planes that accept everything (zero normal, positive offset)
    pub const UNBOUNDED: Self = Self { planes: [Vec4::W; 6] };

    pub fn from_normal_d(planes: [Vec4; 6]) -> Self {
        Self { planes }
    }

    /// Conservative box test: rejects only boxes fully outside at least one plane
    pub fn intersects_aabb(&self, bounds: &WorldAabb) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            // Projected radius of the box onto the plane normal
            let radius = bounds.half_extents.dot(normal.abs());
            normal.dot(bounds.center) + plane.w + radius >= 0.0
        })
    }
}

impl Default for FrustumPlanes {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-frame copy of the camera's frustum
#[derive(Debug, Default)]
pub struct FrustumCache {
    planes: FrustumPlanes,
}

impl FrustumCache {
    pub fn refresh(&mut self, camera: &impl CameraProjection) {
        self.planes = camera.frustum_planes();
    }

    pub fn planes(&self) -> &FrustumPlanes {
        &self.planes
    }
}
