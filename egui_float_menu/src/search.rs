//! Pure search matching and highlight markup.
//!
//! Matching is case-insensitive substring search. A successful match can be
//! rendered plain or with the first occurrence wrapped in a rich-text colour
//! span (`<color=#RRGGBBAA>…</color>`), which [`highlight_layout_job`] turns
//! back into a laid-out label for the host's text renderer.

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId};

const COLOR_TAG_OPEN: &str = "<color=#";
const COLOR_TAG_CLOSE: &str = "</color>";

/// Case-insensitive substring match of `search` within `label`.
///
/// Returns `None` when `search` does not occur in `label`. On a match the
/// label is returned unchanged, unless `highlight` is given, in which case
/// the **first** occurrence is wrapped in a colour span. Callers must not
/// pass an empty `search`: an empty needle trivially matches at index 0 and
/// would wrap a zero-length span; blank searches are short-circuited upstream
/// to "match everything".
pub fn match_label(label: &str, search: &str, highlight: Option<Color32>) -> Option<String> {
    let needle = search.to_lowercase();
    let start = label.to_lowercase().find(&needle)?;
    let Some(color) = highlight else {
        return Some(label.to_owned());
    };

    // Case folding can shift byte offsets (e.g. 'İ' folds to two chars); if
    // the folded position no longer lands on char boundaries of the original
    // label, the match stands but the span is skipped.
    let end = start + needle.len();
    if !label.is_char_boundary(start) || end > label.len() || !label.is_char_boundary(end) {
        return Some(label.to_owned());
    }

    Some(format!(
        "{}{}{}{}{}",
        &label[..start],
        open_tag(color),
        &label[start..end],
        COLOR_TAG_CLOSE,
        &label[end..],
    ))
}

/// Lay out a label that may carry one colour span.
pub fn highlight_layout_job(marked: &str, font_id: FontId, base_color: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    let base = TextFormat {
        font_id: font_id.clone(),
        color: base_color,
        ..Default::default()
    };

    match parse_color_span(marked) {
        Some((pre, color, span, post)) => {
            if !pre.is_empty() {
                job.append(pre, 0.0, base.clone());
            }
            job.append(
                span,
                0.0,
                TextFormat {
                    font_id,
                    color,
                    ..Default::default()
                },
            );
            if !post.is_empty() {
                job.append(post, 0.0, base);
            }
        }
        None => job.append(marked, 0.0, base),
    }
    job
}

fn open_tag(color: Color32) -> String {
    format!(
        "{COLOR_TAG_OPEN}{:02X}{:02X}{:02X}{:02X}>",
        color.r(),
        color.g(),
        color.b(),
        color.a()
    )
}

/// Split `pre<color=#RRGGBBAA>span</color>post` into its pieces.
fn parse_color_span(text: &str) -> Option<(&str, Color32, &str, &str)> {
    let open_start = text.find(COLOR_TAG_OPEN)?;
    let hex_start = open_start + COLOR_TAG_OPEN.len();
    let hex_end = hex_start + 8;
    let color = parse_hex_rgba(text.get(hex_start..hex_end)?)?;
    if text.as_bytes().get(hex_end) != Some(&b'>') {
        return None;
    }
    let span_start = hex_end + 1;
    let close_start = text.get(span_start..)?.find(COLOR_TAG_CLOSE)? + span_start;
    Some((
        &text[..open_start],
        color,
        &text[span_start..close_start],
        &text[close_start + COLOR_TAG_CLOSE.len()..],
    ))
}

fn parse_hex_rgba(hex: &str) -> Option<Color32> {
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    let a = u8::from_str_radix(hex.get(6..8)?, 16).ok()?;
    Some(Color32::from_rgba_premultiplied(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGHLIGHT: Color32 = Color32::from_rgb(109, 200, 238);

    // ── Domain: matching ──

    #[test]
    fn absent_substring_does_not_match() {
        assert_eq!(match_label("Steel longsword", "axe", None), None);
        assert_eq!(match_label("Steel longsword", "axe", Some(HIGHLIGHT)), None);
    }

    #[test]
    fn present_substring_without_colour_returns_label_unchanged() {
        assert_eq!(
            match_label("Steel longsword", "long", None),
            Some("Steel longsword".to_owned())
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(
            match_label("Steel longsword", "STEEL", None),
            Some("Steel longsword".to_owned())
        );
        assert_eq!(
            match_label("STEEL LONGSWORD", "steel", None),
            Some("STEEL LONGSWORD".to_owned())
        );
    }

    // ── Domain: highlighting ──

    #[test]
    fn colour_wraps_the_match_in_one_span() {
        let marked = match_label("Steel longsword", "long", Some(HIGHLIGHT)).unwrap();
        assert_eq!(marked, "Steel <color=#6DC8EEFF>long</color>sword");
    }

    #[test]
    fn only_the_first_occurrence_is_wrapped() {
        let marked = match_label("sandstone wall", "s", Some(HIGHLIGHT)).unwrap();
        assert_eq!(marked, "<color=#6DC8EEFF>s</color>andstone wall");
    }

    #[test]
    fn wrapped_slice_keeps_the_original_case() {
        let marked = match_label("Steel longsword", "sTeEl", Some(HIGHLIGHT)).unwrap();
        assert_eq!(marked, "<color=#6DC8EEFF>Steel</color> longsword");
    }

    // ── Domain: layout job rendering ──

    #[test]
    fn plain_label_lays_out_as_one_section() {
        let job = highlight_layout_job("Steel", FontId::proportional(13.0), Color32::WHITE);
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.text, "Steel");
        assert_eq!(job.sections[0].format.color, Color32::WHITE);
    }

    #[test]
    fn marked_label_lays_out_as_three_sections_with_span_colour() {
        let marked = match_label("Steel longsword", "long", Some(HIGHLIGHT)).unwrap();
        let job = highlight_layout_job(&marked, FontId::proportional(13.0), Color32::WHITE);
        assert_eq!(job.text, "Steel longsword");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[0].format.color, Color32::WHITE);
        assert_eq!(job.sections[1].format.color, HIGHLIGHT);
        assert_eq!(job.sections[2].format.color, Color32::WHITE);
    }

    #[test]
    fn span_at_the_start_omits_the_empty_prefix_section() {
        let marked = match_label("sandstone", "sand", Some(HIGHLIGHT)).unwrap();
        let job = highlight_layout_job(&marked, FontId::proportional(13.0), Color32::WHITE);
        assert_eq!(job.text, "sandstone");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].format.color, HIGHLIGHT);
    }

    #[test]
    fn unparsable_markup_falls_back_to_verbatim_text() {
        let job = highlight_layout_job("<color=#zz>", FontId::proportional(13.0), Color32::WHITE);
        assert_eq!(job.text, "<color=#zz>");
        assert_eq!(job.sections.len(), 1);
    }
}
