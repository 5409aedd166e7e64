//! Column layout engine for the float menu.
//!
//! Pure geometry over fixed item sizes: items fill one column top-to-bottom
//! before the next column starts, every column is as wide as its widest item,
//! and the whole pass is a single O(n) sweep. Same inputs always produce the
//! same layout.

use egui::{Pos2, Vec2};

/// Result of one layout pass. `positions` is index-aligned with the input
/// sizes and relative to the content origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub positions: Vec<Pos2>,
    pub content_size: Vec2,
    /// How many items each column takes before spilling into the next; the
    /// last occupied column may hold fewer.
    pub rows_per_column: usize,
}

impl ColumnLayout {
    fn empty() -> Self {
        Self {
            positions: Vec::new(),
            content_size: Vec2::ZERO,
            rows_per_column: 0,
        }
    }
}

/// Lay out `sizes` into up to `columns` columns.
///
/// Each column carries `padding` on both sides, and `padding` separates
/// stacked items within a column (no leading or trailing vertical padding).
/// Columns with no items contribute nothing to the content bounds.
///
/// `columns` must be at least 1 and `padding` non-negative; the options
/// builder clamps both before they reach this function.
pub fn layout_columns(sizes: &[Vec2], columns: usize, padding: f32) -> ColumnLayout {
    if sizes.is_empty() {
        return ColumnLayout::empty();
    }

    let rows_per_column = sizes.len().div_ceil(columns);
    let mut positions = vec![Pos2::ZERO; sizes.len()];
    let mut column_x = padding;
    let mut content_height = 0.0_f32;

    for column_start in (0..sizes.len()).step_by(rows_per_column) {
        let column_end = (column_start + rows_per_column).min(sizes.len());
        let mut running_y = 0.0_f32;
        let mut column_width = 0.0_f32;

        for (position, size) in positions[column_start..column_end]
            .iter_mut()
            .zip(&sizes[column_start..column_end])
        {
            *position = Pos2::new(column_x, running_y);
            running_y += size.y + padding;
            column_width = column_width.max(size.x);
        }

        content_height = content_height.max(running_y - padding);
        column_x += column_width + 2.0 * padding;
    }

    ColumnLayout {
        positions,
        content_size: Vec2::new(column_x - padding, content_height),
        rows_per_column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    // ── Domain: column partitioning ──

    #[test]
    fn five_items_over_two_columns_split_three_then_two() {
        let sizes = vec![
            vec2(20.0, 10.0),
            vec2(30.0, 10.0),
            vec2(20.0, 10.0),
            vec2(30.0, 10.0),
            vec2(20.0, 10.0),
        ];
        let layout = layout_columns(&sizes, 2, 6.0);

        assert_eq!(layout.rows_per_column, 3);
        // Column 0: items 0..3 stacked at x = padding.
        assert_eq!(layout.positions[0], pos2(6.0, 0.0));
        assert_eq!(layout.positions[1], pos2(6.0, 16.0));
        assert_eq!(layout.positions[2], pos2(6.0, 32.0));
        // Column 1 starts after column 0's width (30) plus 2 * padding.
        assert_eq!(layout.positions[3], pos2(48.0, 0.0));
        assert_eq!(layout.positions[4], pos2(48.0, 16.0));
        // Width: (30 + 12) + (30 + 12); height: taller column, 3*10 + 2*6.
        assert_eq!(layout.content_size, vec2(84.0, 42.0));
    }

    #[test]
    fn single_column_stacks_everything() {
        let sizes = vec![vec2(40.0, 10.0), vec2(60.0, 20.0), vec2(50.0, 10.0)];
        let layout = layout_columns(&sizes, 1, 4.0);

        assert_eq!(layout.rows_per_column, 3);
        assert_eq!(layout.positions[0], pos2(4.0, 0.0));
        assert_eq!(layout.positions[1], pos2(4.0, 14.0));
        assert_eq!(layout.positions[2], pos2(4.0, 38.0));
        assert_eq!(layout.content_size, vec2(68.0, 48.0));
    }

    #[test]
    fn more_columns_than_items_uses_one_item_per_column() {
        let sizes = vec![vec2(10.0, 10.0), vec2(20.0, 10.0), vec2(30.0, 10.0)];
        let layout = layout_columns(&sizes, 5, 2.0);

        assert_eq!(layout.rows_per_column, 1);
        assert_eq!(layout.positions[0], pos2(2.0, 0.0));
        assert_eq!(layout.positions[1], pos2(16.0, 0.0));
        assert_eq!(layout.positions[2], pos2(40.0, 0.0));
        // Only occupied columns contribute: (10+4) + (20+4) + (30+4).
        assert_eq!(layout.content_size, vec2(72.0, 10.0));
    }

    #[test]
    fn zero_padding_packs_columns_tightly() {
        let sizes = vec![vec2(10.0, 5.0), vec2(10.0, 5.0), vec2(10.0, 5.0), vec2(10.0, 5.0)];
        let layout = layout_columns(&sizes, 2, 0.0);

        assert_eq!(layout.positions[2], pos2(10.0, 0.0));
        assert_eq!(layout.content_size, vec2(20.0, 10.0));
    }

    // ── Domain: degenerate inputs ──

    #[test]
    fn no_items_yields_empty_layout() {
        let layout = layout_columns(&[], 2, 6.0);
        assert!(layout.positions.is_empty());
        assert_eq!(layout.content_size, Vec2::ZERO);
    }

    // ── Domain: determinism ──

    #[test]
    fn identical_inputs_produce_identical_layouts() {
        let sizes = vec![vec2(25.0, 12.0), vec2(35.0, 8.0), vec2(15.0, 30.0)];
        let first = layout_columns(&sizes, 2, 6.0);
        let second = layout_columns(&sizes, 2, 6.0);
        assert_eq!(first, second);
    }
}
