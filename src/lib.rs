//! Real-time object selection for 3D scenes: single-click picking, marquee
//! (drag-box) multi-selection and hover highlighting.
//!
//! The core in [`selection`] only talks to the engine through a handful of
//! host traits ([`selection::CameraProjection`], [`selection::SpatialQuery`],
//! [`selection::SurfaceHighlight`] and friends). [`plugin::SelectionPlugin`]
//! wires it into Bevy: tag a camera with [`types::SelectionCamera`] and any
//! mesh entity with [`types::Selectable`].

pub mod constants;
pub mod math_utils;
pub mod plugin;
pub mod selection;
pub mod types;

pub use plugin::{SelectionPlugin, SelectionState};
pub use selection::{SelectionConfig, SelectionLayers};
pub use types::{Selectable, SelectionCamera, SelectionChanged};
