use bevy::prelude::*;

use crate::selection::SelectionLayers;

/// Marks an entity as pickable. Needs world bounds, which Bevy provides for
/// meshes through the `Aabb` component.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selectable {
    pub layers: SelectionLayers,
}

/// The camera selection projects and casts through. Resolved once when added.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SelectionCamera;

/// Per-entity material instances and the colour each one started with
#[derive(Component, Debug, Default)]
pub struct HighlightSurfaces {
    pub surfaces: Vec<(Handle<StandardMaterial>, Color)>,
}

// Marker component for box selection rectangle visual (UI element)
#[derive(Component)]
pub struct BoxSelectionVisual;

/// Written whenever a click or marquee replaced the selection
#[derive(Event, Clone, Debug)]
pub struct SelectionChanged {
    pub selected: Vec<Entity>,
}
