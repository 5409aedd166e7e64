//! The float menu controller.
//!
//! A [`FloatMenu`] owns one opened menu: its configuration, the live search
//! string, and the filtered-item cache. The value itself is the open-menu
//! handle: construct it when the menu opens, call [`FloatMenu::show`] once
//! per frame, and drop it once the response reports the menu closed.

use egui::{Color32, Key, Pos2, Rect, ScrollArea, Sense, Stroke, StrokeKind, TextEdit, Vec2};

use crate::item::{MenuItem, SearchMatch};
use crate::layout::{self, ColumnLayout};
use crate::theme::FloatMenuTheme;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for one opened menu, built once at open time.
pub struct FloatMenuOptions {
    items: Vec<Box<dyn MenuItem>>,
    on_selected: Option<Box<dyn FnMut(&dyn MenuItem)>>,
    close_on_selected: bool,
    can_search: bool,
    columns: usize,
    padding: f32,
}

impl FloatMenuOptions {
    pub fn new(items: Vec<Box<dyn MenuItem>>) -> Self {
        Self {
            items,
            on_selected: None,
            close_on_selected: true,
            can_search: true,
            columns: 2,
            padding: 6.0,
        }
    }

    /// Callback dispatched when an item is clicked or confirmed. Invoked at
    /// most once per click, never during layout.
    pub fn on_selected(mut self, callback: impl FnMut(&dyn MenuItem) + 'static) -> Self {
        self.on_selected = Some(Box::new(callback));
        self
    }

    /// Whether a selection closes the menu. Default: true.
    pub fn close_on_selected(mut self, close: bool) -> Self {
        self.close_on_selected = close;
        self
    }

    /// Whether the search field is shown. Default: true.
    pub fn can_search(mut self, can_search: bool) -> Self {
        self.can_search = can_search;
        self
    }

    /// Number of columns, clamped to at least 1. Default: 2.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Padding between and around items, clamped to non-negative. Default: 6.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }
}

// ---------------------------------------------------------------------------
// FloatMenu
// ---------------------------------------------------------------------------

/// One surviving item of a filter pass, with its marked-up label if any.
struct FilteredEntry {
    index: usize,
    highlight: Option<String>,
}

/// What happened during one [`FloatMenu::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatMenuResponse {
    /// The menu is still open; keep calling `show` next frame.
    pub open: bool,
    /// An item was dispatched this frame.
    pub selected: bool,
}

/// A searchable, multi-column selection popup.
pub struct FloatMenu {
    options: FloatMenuOptions,
    theme: FloatMenuTheme,
    pos: Pos2,
    search: String,
    filtered: Vec<FilteredEntry>,
    last_search: Option<String>,
    last_len: usize,
    cursor: usize,
    just_opened: bool,
    open: bool,
}

impl FloatMenu {
    /// Open a menu at `pos` with the default theme.
    pub fn new(pos: Pos2, options: FloatMenuOptions) -> Self {
        Self::with_theme(pos, options, FloatMenuTheme::default())
    }

    pub fn with_theme(pos: Pos2, options: FloatMenuOptions, theme: FloatMenuTheme) -> Self {
        Self {
            options,
            theme,
            pos,
            search: String::new(),
            filtered: Vec::new(),
            last_search: None,
            last_len: 0,
            cursor: 0,
            just_opened: true,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Drive one frame of the menu. Closes on selection (unless configured
    /// otherwise), on Escape, on a click outside the menu, or when the item
    /// list is empty.
    pub fn show(&mut self, ctx: &egui::Context) -> FloatMenuResponse {
        if !self.open {
            return FloatMenuResponse::default();
        }

        let mut selected = false;
        let area = egui::Area::new(egui::Id::new("float_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(self.pos)
            .show(ctx, |ui| {
                egui::Frame::menu(ui.style()).show(ui, |ui| {
                    selected = self.show_contents(ui);
                });
            });

        // The click that opened the menu must not immediately close it again.
        if self.just_opened {
            self.just_opened = false;
        } else if area.response.clicked_elsewhere() {
            self.open = false;
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.open = false;
        }

        FloatMenuResponse {
            open: self.open,
            selected,
        }
    }

    /// Render the menu body into `ui`. Returns whether an item was
    /// dispatched. Exposed so the menu can be embedded outside the default
    /// `Area` chrome.
    pub fn show_contents(&mut self, ui: &mut egui::Ui) -> bool {
        if self.options.items.is_empty() {
            if self.open {
                log::warn!("float menu opened with no items; closing");
                self.open = false;
            }
            return false;
        }

        if self.options.can_search {
            let response = ui.add(
                TextEdit::singleline(&mut self.search)
                    .hint_text("Search...")
                    .desired_width(self.theme.search_width),
            );
            if self.search.is_empty() && !ui.memory(|m| m.has_focus(response.id)) {
                response.request_focus();
            }
            if response.changed() {
                self.cursor = 0;
            }
            ui.separator();
        }

        self.refilter_if_needed();

        if self.filtered.is_empty() {
            ui.label("No results");
            return false;
        }

        self.step_cursor(ui);
        let confirm = ui.input(|i| i.key_pressed(Key::Enter));

        let sizes: Vec<Vec2> = self
            .filtered
            .iter()
            .map(|entry| self.options.items[entry.index].size())
            .collect();
        let layout = layout::layout_columns(&sizes, self.options.columns, self.options.padding);

        let mut dispatched = false;
        ScrollArea::vertical()
            .max_height(self.theme.max_height)
            .show(ui, |ui| {
                let (content_rect, _) = ui.allocate_exact_size(layout.content_size, Sense::hover());
                dispatched = self.show_items(ui, content_rect.min, &layout, confirm);
            });
        dispatched
    }

    /// Refilter when searching is live, when the search string changed, or
    /// when the unfiltered item count changed.
    fn refilter_if_needed(&mut self) {
        let stale = self.options.can_search
            || self.last_search.as_deref() != Some(self.search.as_str())
            || self.last_len != self.options.items.len();
        if !stale {
            return;
        }
        self.filtered = filter_items(&self.options.items, &self.search, self.theme.highlight_color);
        self.last_search = Some(self.search.clone());
        self.last_len = self.options.items.len();
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }

    fn step_cursor(&mut self, ui: &egui::Ui) {
        let last = self.filtered.len().saturating_sub(1);
        if ui.input(|i| i.key_pressed(Key::ArrowDown)) {
            self.cursor = (self.cursor + 1).min(last);
        }
        if ui.input(|i| i.key_pressed(Key::ArrowUp)) {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.cursor = self.cursor.min(last);
    }

    /// Draw and hit-test the filtered items column by column. After a
    /// dispatch that closes the menu, the rest of that column is skipped for
    /// the frame.
    fn show_items(
        &mut self,
        ui: &mut egui::Ui,
        origin: Pos2,
        layout: &ColumnLayout,
        confirm: bool,
    ) -> bool {
        let mut dispatched = false;
        let rows = layout.rows_per_column.max(1);
        let count = self.filtered.len();

        for column_start in (0..count).step_by(rows) {
            let column_end = (column_start + rows).min(count);
            for i in column_start..column_end {
                let entry = &self.filtered[i];
                let item = &self.options.items[entry.index];
                let rect = Rect::from_min_size(origin + layout.positions[i].to_vec2(), item.size());

                let response = item.show(ui, rect, &self.theme, entry.highlight.as_deref());

                if i == self.cursor {
                    ui.painter().rect_stroke(
                        rect.expand(1.0),
                        self.theme.corner_radius,
                        Stroke::new(1.5, ui.visuals().selection.stroke.color),
                        StrokeKind::Outside,
                    );
                    ui.scroll_to_rect(rect, Some(egui::Align::Center));
                }

                let activated =
                    (response.clicked() || (confirm && i == self.cursor)) && item.enabled();
                if activated && !dispatched {
                    dispatched = true;
                    if let Some(on_selected) = self.options.on_selected.as_mut() {
                        on_selected(item.as_ref());
                    }
                    if self.options.close_on_selected {
                        self.open = false;
                        break;
                    }
                }
            }
        }
        dispatched
    }
}

/// Filter `items` by `search`, materialized for random access. A blank
/// search keeps everything and never reaches the matcher.
fn filter_items(
    items: &[Box<dyn MenuItem>],
    search: &str,
    highlight: Color32,
) -> Vec<FilteredEntry> {
    let query = search.trim();
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilteredEntry {
                index,
                highlight: None,
            })
            .collect();
    }

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            item.matches_search(query, highlight).map(|matched| FilteredEntry {
                index,
                highlight: match matched {
                    SearchMatch::Plain => None,
                    SearchMatch::Highlighted(label) => Some(label),
                },
            })
        })
        .collect()
}
