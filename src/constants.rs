use bevy::prelude::Color;

// Selection system settings
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;                               // Pixels; smaller drags in both axes are clicks
pub const HOVER_COLOR: Color = Color::srgba(1.0, 0.8, 0.0, 0.5);         // Amber
pub const SELECTED_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 0.5);      // Green
pub const SELECTION_BOX_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.2); // Translucent white marquee

// Demo scene settings
pub const DEMO_CUBE_COUNT: usize = 400;
pub const DEMO_FIELD_SIZE: f32 = 120.0;
pub const DEMO_CUBE_MIN_SIZE: f32 = 0.8;
pub const DEMO_CUBE_MAX_SIZE: f32 = 3.0;
pub const DEMO_CAMERA_SPEED: f32 = 40.0;
