// Hover highlight - one transient target, never painted over a selected object
use bevy::prelude::*;

use super::click::pick_at;
use super::host::{CameraProjection, ObjectHandle, SpatialQuery, SurfaceHighlight};
use super::layers::SelectionLayers;
use super::state::SelectionSet;

#[derive(Debug)]
pub struct HoverTracker<O> {
    target: Option<O>,
    /// True while `target` currently shows the hover colour
    highlighted: bool,
    hover_color: Color,
}

impl<O: ObjectHandle> HoverTracker<O> {
    pub fn new(hover_color: Color) -> Self {
        Self {
            target: None,
            highlighted: false,
            hover_color,
        }
    }

    pub fn target(&self) -> Option<O> {
        self.target
    }

    /// Re-evaluate the target under `pointer`. Must run after this frame's selection changes.
    pub fn update<S: SpatialQuery<Object = O>>(
        &mut self,
        pointer: Vec2,
        camera: &impl CameraProjection,
        scene: &S,
        filter: SelectionLayers,
        selection: &SelectionSet<O>,
        surfaces: &mut impl SurfaceHighlight<O>,
    ) {
        let hit = pick_at(pointer, camera, scene, filter);

        if hit != self.target {
            self.release(selection, surfaces);
            debug!("Hover target {:?} -> {:?}", self.target, hit);
            self.target = hit;
        }

        let Some(target) = self.target else { return };

        if selection.contains(&target) {
            // Selection owns the colour now
            self.highlighted = false;
        } else if !self.highlighted {
            surfaces.set_surface_color(target, self.hover_color);
            self.highlighted = true;
        }
    }

    /// Drop the target if `gone` says so, reverting its hover colour
    pub fn forget_if(
        &mut self,
        gone: impl FnOnce(&O) -> bool,
        selection: &SelectionSet<O>,
        surfaces: &mut impl SurfaceHighlight<O>,
    ) {
        if self.target.as_ref().is_some_and(gone) {
            self.release(selection, surfaces);
            self.target = None;
        }
    }

    fn release(&mut self, selection: &SelectionSet<O>, surfaces: &mut impl SurfaceHighlight<O>) {
        if let Some(previous) = self.target {
            if self.highlighted && !selection.contains(&previous) {
                surfaces.reset_surface_color(previous);
            }
        }
        self.highlighted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::test_support::*;

    struct Fixture {
        scene: MockScene,
        camera: OrthoCamera,
        surfaces: MockSurfaces,
        selection: SelectionSet<u32>,
        hover: HoverTracker<u32>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                scene: MockScene::new(vec![
                    cube(1, Vec3::new(0.0, 0.0, -10.0), 1.0),
                    cube(2, Vec3::new(10.0, 0.0, -10.0), 1.0),
                ]),
                camera: OrthoCamera::default(),
                surfaces: MockSurfaces::default(),
                selection: SelectionSet::new(SELECTED_COLOR),
                hover: HoverTracker::new(HOVER_COLOR),
            }
        }

        fn point_at(&mut self, pointer: Vec2) {
            self.hover.update(
                pointer,
                &self.camera,
                &self.scene,
                SelectionLayers::DEFAULT,
                &self.selection,
                &mut self.surfaces,
            );
        }
    }

    fn over_one() -> Vec2 {
        screen_of(Vec3::new(0.0, 0.0, -10.0))
    }

    fn over_two() -> Vec2 {
        screen_of(Vec3::new(10.0, 0.0, -10.0))
    }

    const NOWHERE: Vec2 = Vec2::new(50.0, 50.0);

    #[test]
    fn hovering_paints_hover_color() {
        let mut f = Fixture::new();
        f.point_at(over_one());

        assert_eq!(f.hover.target(), Some(1));
        assert_eq!(f.surfaces.color_of(1), HOVER_COLOR);
    }

    #[test]
    fn leaving_resets_exactly_once() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.point_at(NOWHERE);
        f.point_at(NOWHERE);

        assert_eq!(f.hover.target(), None);
        assert_eq!(f.surfaces.color_of(1), DEFAULT_SURFACE_COLOR);
        assert_eq!(f.surfaces.reset_count(1), 1);
    }

    #[test]
    fn staying_on_target_does_not_repaint() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.point_at(over_one());
        f.point_at(over_one());

        assert_eq!(f.surfaces.set_count(1), 1);
    }

    #[test]
    fn moving_between_objects_swaps_highlight() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.point_at(over_two());

        assert_eq!(f.hover.target(), Some(2));
        assert_eq!(f.surfaces.color_of(1), DEFAULT_SURFACE_COLOR);
        assert_eq!(f.surfaces.color_of(2), HOVER_COLOR);
    }

    #[test]
    fn selected_object_keeps_selected_color() {
        let mut f = Fixture::new();
        f.selection.add(1, &mut f.surfaces);

        f.point_at(over_one());
        f.point_at(over_one());
        assert_eq!(f.surfaces.color_of(1), SELECTED_COLOR);

        f.point_at(NOWHERE);
        assert_eq!(f.surfaces.color_of(1), SELECTED_COLOR);
        assert_eq!(f.surfaces.reset_count(1), 0);
    }

    #[test]
    fn selecting_the_hover_target_hands_color_to_selection() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.selection.add(1, &mut f.surfaces);
        f.point_at(over_one());
        f.point_at(NOWHERE);

        assert_eq!(f.surfaces.color_of(1), SELECTED_COLOR);
        assert_eq!(f.surfaces.reset_count(1), 0);
    }

    #[test]
    fn deselected_target_under_pointer_gets_hover_back() {
        let mut f = Fixture::new();
        f.selection.add(1, &mut f.surfaces);
        f.point_at(over_one());

        f.selection.clear(&mut f.surfaces);
        f.point_at(over_one());

        assert_eq!(f.surfaces.color_of(1), HOVER_COLOR);
    }

    #[test]
    fn forgotten_target_is_reset_once() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.hover.forget_if(|object| *object == 1, &f.selection, &mut f.surfaces);

        assert_eq!(f.hover.target(), None);
        assert_eq!(f.surfaces.color_of(1), DEFAULT_SURFACE_COLOR);
        f.point_at(NOWHERE);
        assert_eq!(f.surfaces.reset_count(1), 1);
    }

    #[test]
    fn forgetting_another_object_keeps_target() {
        let mut f = Fixture::new();
        f.point_at(over_one());
        f.hover.forget_if(|object| *object == 2, &f.selection, &mut f.surfaces);

        assert_eq!(f.hover.target(), Some(1));
        assert_eq!(f.surfaces.color_of(1), HOVER_COLOR);
    }
}
