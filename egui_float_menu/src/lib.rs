//! Standalone egui-based searchable float menu widget.
//!
//! A tiled, searchable, sortable replacement for a plain dropdown. Items are
//! filtered by a live search string, partitioned into fixed columns, and laid
//! out top-to-bottom, left-to-right. This crate has no domain-specific
//! dependencies: callers describe their content through the [`MenuItem`]
//! trait (or the built-in [`TextItem`] / [`IconItem`] variants) and receive
//! selections through a callback configured on [`FloatMenuOptions`].

pub mod item;
pub mod layout;
pub mod search;
pub mod theme;
pub mod widget;

pub use item::{IconItem, MenuItem, Payload, PayloadError, SearchMatch, TextItem, make_items};
pub use layout::{ColumnLayout, layout_columns};
pub use theme::FloatMenuTheme;
pub use widget::{FloatMenu, FloatMenuOptions, FloatMenuResponse};
