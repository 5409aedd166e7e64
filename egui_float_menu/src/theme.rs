//! Theming for the float menu.

use egui::{Color32, FontId, Vec2};

/// Theme configuration for the float menu.
pub struct FloatMenuTheme {
    /// Colour applied to the matched slice of a label while searching.
    pub highlight_color: Color32,
    /// Base label colour.
    pub label_color: Color32,
    /// Item label font.
    pub item_font: FontId,
    /// Corner rounding for item boxes.
    pub corner_radius: f32,
    /// Maximum height of the scrollable content region.
    pub max_height: f32,
    /// Width of the search field.
    pub search_width: f32,
    /// Edge size of an icon rendered inline in a text row.
    pub inline_icon_size: Vec2,
}

impl Default for FloatMenuTheme {
    fn default() -> Self {
        Self {
            highlight_color: Color32::from_rgb(109, 200, 238),
            label_color: Color32::from_rgb(220, 220, 220),
            item_font: FontId::proportional(13.0),
            corner_radius: 3.0,
            max_height: 320.0,
            search_width: 200.0,
            inline_icon_size: Vec2::new(18.0, 18.0),
        }
    }
}
