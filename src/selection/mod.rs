// Selection module - click picking, marquee selection and hover highlighting
//
// Submodules:
// - host: Narrow traits the engine implements (pointer, camera, spatial queries, surfaces, overlay)
// - state: Drag state and the selection set (colour mirrors membership)
// - input: Drag tracking and click/box classification
// - click: Single-click picking
// - box_select: Marquee selection against projected bounds
// - hover: Transient hover highlight
// - frustum: Per-frame frustum planes
// - bounds: World AABBs and their screen footprint
// - controller: Per-frame driver

mod bounds;
mod box_select;
mod click;
mod config;
mod controller;
mod frustum;
mod host;
mod hover;
mod input;
mod layers;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use bounds::{screen_rect_of_bounds, WorldAabb};
pub use box_select::{is_in_selection, resolve_box};
pub use click::{pick_at, resolve_click};
pub use config::SelectionConfig;
pub use controller::{SelectionController, SelectionOutcome};
pub use frustum::{FrustumCache, FrustumPlanes};
pub use host::{
    CameraProjection, ObjectHandle, OverlayPainter, PointerInput, RayHit, ScreenPoint,
    SpatialQuery, SurfaceHighlight,
};
pub use hover::HoverTracker;
pub use input::{drag_rect, is_click, DragRelease, DragTracker};
pub use layers::SelectionLayers;
pub use state::{DragPhase, DragState, SelectionSet};
