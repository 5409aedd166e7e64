//! Menu content abstraction.
//!
//! Items are polymorphic over the [`MenuItem`] trait, whose capability set is
//! search matching, weak ordering, and fixed-size drawing. [`TextItem`] and
//! [`IconItem`] are the built-in variants; callers can implement the trait
//! for their own. Every item may carry a [`Payload`] of type-erased user
//! data, retrieved with a runtime type check.

use std::any::{Any, type_name};
use std::cmp::Ordering;

use egui::{Color32, Rect, Response, Stroke, StrokeKind, TextureId, Ui, Vec2};
use thiserror::Error;

use crate::search;
use crate::theme::FloatMenuTheme;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Error raised when a payload is retrieved as the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload holds a {found}, not a {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Type-erased user data carried by a menu item, opaque to the menu itself.
pub struct Payload {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Retrieve the stored value, checking it against the requested type.
    pub fn get<T: 'static>(&self) -> Result<&T, PayloadError> {
        self.value
            .downcast_ref::<T>()
            .ok_or(PayloadError::TypeMismatch {
                expected: type_name::<T>(),
                found: self.type_name,
            })
    }

    /// Name of the stored concrete type, for diagnostics.
    pub fn stored_type(&self) -> &'static str {
        self.type_name
    }
}

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// Outcome of matching an item against a non-empty search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMatch {
    /// The item matches; draw it with its stored label.
    Plain,
    /// The item matches; draw it with this marked-up label instead.
    Highlighted(String),
}

/// One selectable unit of menu content.
pub trait MenuItem {
    /// Opaque user data attached to this item, if any.
    fn payload(&self) -> Option<&Payload>;

    /// Fixed drawing size; always finite and non-negative. Labels are
    /// truncated to fit, never measured.
    fn size(&self) -> Vec2;

    /// Border colour drawn around the item box.
    fn box_color(&self) -> Color32;

    /// Border thickness in pixels; zero disables the border.
    fn box_thickness(&self) -> f32;

    /// Whether the item can be activated. Disabled items draw dimmed and
    /// never dispatch a selection.
    fn enabled(&self) -> bool {
        true
    }

    /// Match against a non-empty search string. `None` hides the item.
    fn matches_search(&self, search: &str, highlight: Color32) -> Option<SearchMatch>;

    /// Weak ordering used by [`make_items`]; unrelated variants compare
    /// equal so mixed lists sort without panicking.
    fn cmp_order(&self, other: &dyn MenuItem) -> Ordering;

    /// Draw into `rect` and return the hit-test response. `highlight`
    /// overrides the displayed label for this frame.
    fn show(
        &self,
        ui: &mut Ui,
        rect: Rect,
        theme: &FloatMenuTheme,
        highlight: Option<&str>,
    ) -> Response;

    /// Concrete-type access for cross-variant ordering.
    fn as_any(&self) -> &dyn Any;
}

// ---------------------------------------------------------------------------
// TextItem
// ---------------------------------------------------------------------------

/// A labelled row, optionally with a leading icon and a hover tooltip.
pub struct TextItem {
    pub label: String,
    pub tooltip: Option<String>,
    pub icon: Option<TextureId>,
    pub icon_tint: Color32,
    pub size: Vec2,
    pub enabled: bool,
    pub payload: Option<Payload>,
    pub box_color: Color32,
    pub box_thickness: f32,
}

impl TextItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            icon: None,
            icon_tint: Color32::WHITE,
            size: Vec2::new(150.0, 29.0),
            enabled: true,
            payload: None,
            box_color: Color32::from_gray(95),
            box_thickness: 1.0,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_icon(mut self, icon: TextureId, tint: Color32) -> Self {
        self.icon = Some(icon);
        self.icon_tint = tint;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_payload<T: 'static>(mut self, payload: T) -> Self {
        self.payload = Some(Payload::new(payload));
        self
    }

    pub fn with_box(mut self, color: Color32, thickness: f32) -> Self {
        self.box_color = color;
        self.box_thickness = thickness;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl MenuItem for TextItem {
    fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn box_color(&self) -> Color32 {
        self.box_color
    }

    fn box_thickness(&self) -> f32 {
        self.box_thickness
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn matches_search(&self, search: &str, highlight: Color32) -> Option<SearchMatch> {
        search::match_label(&self.label, search, Some(highlight)).map(SearchMatch::Highlighted)
    }

    fn cmp_order(&self, other: &dyn MenuItem) -> Ordering {
        match other.as_any().downcast_ref::<TextItem>() {
            Some(other) => self.label.cmp(&other.label),
            None => Ordering::Equal,
        }
    }

    fn show(
        &self,
        ui: &mut Ui,
        rect: Rect,
        theme: &FloatMenuTheme,
        highlight: Option<&str>,
    ) -> Response {
        let marked = highlight.unwrap_or(&self.label);
        let text = search::highlight_layout_job(marked, theme.item_font.clone(), theme.label_color);

        let button = match self.icon {
            Some(icon) => egui::Button::image_and_text(
                egui::Image::new((icon, theme.inline_icon_size)).tint(self.icon_tint),
                text,
            ),
            None => egui::Button::new(text),
        }
        .wrap_mode(egui::TextWrapMode::Truncate);

        let response = ui
            .add_enabled_ui(self.enabled, |ui| ui.put(rect, button))
            .inner;
        draw_item_box(ui, rect, theme, self.box_color, self.box_thickness);

        match &self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip.as_str()),
            None => response,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// IconItem
// ---------------------------------------------------------------------------

/// A tinted icon tile. Icon items have no label; an optional tooltip is the
/// only text attached to them.
pub struct IconItem {
    pub icon: TextureId,
    pub tint: Color32,
    pub background: Color32,
    pub tooltip: Option<String>,
    pub size: Vec2,
    pub payload: Option<Payload>,
    pub box_color: Color32,
    pub box_thickness: f32,
}

impl IconItem {
    pub fn new(icon: TextureId, tint: Color32) -> Self {
        Self {
            icon,
            tint,
            background: Color32::TRANSPARENT,
            tooltip: None,
            size: Vec2::new(29.0, 29.0),
            payload: None,
            box_color: Color32::from_gray(95),
            box_thickness: 1.0,
        }
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_payload<T: 'static>(mut self, payload: T) -> Self {
        self.payload = Some(Payload::new(payload));
        self
    }

    pub fn with_box(mut self, color: Color32, thickness: f32) -> Self {
        self.box_color = color;
        self.box_thickness = thickness;
        self
    }
}

impl MenuItem for IconItem {
    fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn box_color(&self) -> Color32 {
        self.box_color
    }

    fn box_thickness(&self) -> f32 {
        self.box_thickness
    }

    fn matches_search(&self, search: &str, _highlight: Color32) -> Option<SearchMatch> {
        // Icon-only items carry no text, so a text filter never hides them.
        match &self.tooltip {
            None => Some(SearchMatch::Plain),
            Some(tooltip) => search::match_label(tooltip, search, None).map(|_| SearchMatch::Plain),
        }
    }

    fn cmp_order(&self, _other: &dyn MenuItem) -> Ordering {
        // Icon items keep insertion order; the stable sort preserves it.
        Ordering::Equal
    }

    fn show(
        &self,
        ui: &mut Ui,
        rect: Rect,
        theme: &FloatMenuTheme,
        _highlight: Option<&str>,
    ) -> Response {
        if self.background != Color32::TRANSPARENT {
            ui.painter()
                .rect_filled(rect, theme.corner_radius, self.background);
        }
        let image = egui::Image::new((self.icon, rect.size())).tint(self.tint);
        let response = ui.put(rect, egui::Button::image(image).frame(false));
        draw_item_box(ui, rect, theme, self.box_color, self.box_thickness);

        match &self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip.as_str()),
            None => response,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn draw_item_box(ui: &Ui, rect: Rect, theme: &FloatMenuTheme, color: Color32, thickness: f32) {
    if thickness > 0.0 {
        ui.painter().rect_stroke(
            rect,
            theme.corner_radius,
            Stroke::new(thickness, color),
            StrokeKind::Inside,
        );
    }
}

// ---------------------------------------------------------------------------
// Item factory
// ---------------------------------------------------------------------------

/// Build a sorted item list from arbitrary source data.
///
/// Elements mapping to `None` are dropped; the output never contains holes.
/// Sorting uses [`MenuItem::cmp_order`] and is stable, so equal-comparing
/// items keep their input order.
pub fn make_items<T>(
    raw: impl IntoIterator<Item = T>,
    mut to_item: impl FnMut(T) -> Option<Box<dyn MenuItem>>,
) -> Vec<Box<dyn MenuItem>> {
    let mut items: Vec<Box<dyn MenuItem>> =
        raw.into_iter().filter_map(|element| to_item(element)).collect();
    items.sort_by(|a, b| a.cmp_order(b.as_ref()));
    items
}
