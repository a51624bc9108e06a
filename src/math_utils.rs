use bevy::prelude::*;

/// Ray-AABB intersection test (slab method)
/// Returns the distance along the ray to the entry point, or to the exit point
/// when the ray starts inside the box. `ray_direction` does not need to be normalized,
/// the distance is then in multiples of its length.
pub fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    box_min: Vec3,
    box_max: Vec3,
) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction.abs() < 1e-8 {
            // Parallel to this slab: must already be between its planes
            if origin < box_min[axis] || origin > box_max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let mut t1 = (box_min[axis] - origin) * inv;
        let mut t2 = (box_max[axis] - origin) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_near = t_near.max(t1);
        t_far = t_far.min(t2);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }
    }

    if t_near >= 0.0 {
        Some(t_near)
    } else {
        Some(t_far)
    }
}

/// Rectangle overlap where shared edges and corners count as overlapping
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && b.min.x <= a.max.x && a.min.y <= b.max.y && b.min.y <= a.max.y
}
