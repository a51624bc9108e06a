// Selection configuration, fixed once the plugin is built
use bevy::prelude::*;

use crate::constants::*;
use super::layers::SelectionLayers;

/// Inserted as a resource by the plugin; the controller keeps its own copy,
/// so changing the resource afterwards has no effect on selection.
#[derive(Resource, Clone, Debug)]
pub struct SelectionConfig {
    /// Layers considered by every ray and volume query
    pub filter: SelectionLayers,
    pub hover_color: Color,
    pub selected_color: Color,
    pub selection_box_color: Color,
    /// Drags smaller than this in both dimensions are clicks (pixels)
    pub click_threshold: f32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            filter: SelectionLayers::DEFAULT,
            hover_color: HOVER_COLOR,
            selected_color: SELECTED_COLOR,
            selection_box_color: SELECTION_BOX_COLOR,
            click_threshold: CLICK_DRAG_THRESHOLD,
        }
    }
}
