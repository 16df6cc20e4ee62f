//! Line wrapping and pagination for letter text.
//!
//! Greedy word-wrap against the static Helvetica metric table, then top-down
//! placement with a fixed leading. A line is placed only if at least one full
//! `line_height` remains above the bottom margin; otherwise the page is
//! finalized and placement restarts at the top of a fresh page.
//!
//! Positions are PDF-style: y is the text baseline measured from the page
//! bottom, x is always the left margin.

use crate::render::font_metrics::{FontMetrics, LayoutConfig};

// ────────────────────────────────────────────────────────────────────────────
// Layout result types
// ────────────────────────────────────────────────────────────────────────────

/// One line of text with its baseline position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Baseline y in points from the page bottom.
    pub y: f32,
}

/// All drawn lines of a single page, in top-to-bottom order.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

// ────────────────────────────────────────────────────────────────────────────
// Word wrap
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word-wrap of a single paragraph.
///
/// Words are accumulated onto the current line while the measured width stays
/// within `config.max_text_width()`; the first word of a line is always placed,
/// so wrapping never splits mid-word (a word wider than the whole line
/// occupies its own line). An empty or whitespace-only paragraph yields one
/// empty line: a paragraph break still consumes vertical space.
pub fn wrap_paragraph(paragraph: &str, metrics: &FontMetrics, config: &LayoutConfig) -> Vec<String> {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let max_width = config.max_text_width();
    let space_w = metrics.space_pt(config.font_size);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in &words {
        let word_w = metrics.measure_pt(word, config.font_size);

        if !current.is_empty() && current_width + space_w + word_w > max_width {
            // Current line is full — emit it and start the next with this word.
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_width += space_w;
            }
            current.push_str(word);
            current_width += word_w;
        }
    }
    lines.push(current);
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Lays the full text out into fixed-size pages.
///
/// The text is split into paragraphs on `'\n'`, each paragraph is word-wrapped,
/// and the resulting lines are placed top-down starting at
/// `config.first_baseline()`. Before each line the remaining vertical space is
/// checked (`current_y - margin < line_height` forces a page break), so a
/// blank line at the bottom of a page consumes the first slot of the next page
/// exactly like a drawn line would. Empty lines advance the cursor but are not
/// recorded.
///
/// Always returns at least one page.
pub fn paginate(text: &str, metrics: &FontMetrics, config: &LayoutConfig) -> Vec<PageLayout> {
    let mut pages: Vec<PageLayout> = Vec::new();
    let mut current = PageLayout::default();
    let mut current_y = config.first_baseline();

    for paragraph in text.split('\n') {
        for line in wrap_paragraph(paragraph, metrics, config) {
            if current_y - config.margin < config.line_height {
                pages.push(std::mem::take(&mut current));
                current_y = config.first_baseline();
            }
            if !line.is_empty() {
                current.lines.push(PlacedLine {
                    text: line,
                    y: current_y,
                });
            }
            current_y -= config.line_height;
        }
    }
    pages.push(current);
    pages
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::font_metrics::helvetica;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    // ── wrap_paragraph ──────────────────────────────────────────────────────

    #[test]
    fn test_wrap_empty_paragraph_is_one_blank_line() {
        let lines = wrap_paragraph("", helvetica(), &config());
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_wrap_whitespace_only_paragraph_is_one_blank_line() {
        let lines = wrap_paragraph("   \t ", helvetica(), &config());
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_wrap_single_word_one_line() {
        let lines = wrap_paragraph("Dear", helvetica(), &config());
        assert_eq!(lines, vec!["Dear".to_string()]);
    }

    #[test]
    fn test_wrap_short_sentence_stays_on_one_line() {
        let lines = wrap_paragraph("Dear Hiring Manager,", helvetica(), &config());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "Dear Hiring Manager,");
    }

    #[test]
    fn test_wrap_collapses_repeated_whitespace() {
        let lines = wrap_paragraph("Dear   Hiring \t Manager,", helvetica(), &config());
        assert_eq!(lines[0], "Dear Hiring Manager,");
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let text = "I am writing to express my strong interest in the advertised \
                    position and to describe how my background matches the role";
        let lines = wrap_paragraph(text, helvetica(), &config());
        let original: Vec<&str> = text.split_whitespace().collect();
        let rejoined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(String::from))
            .collect();
        assert_eq!(rejoined, original, "every word must survive wrapping intact");
    }

    #[test]
    fn test_wrap_lines_fit_within_max_width() {
        let metrics = helvetica();
        let cfg = config();
        let text = "experience ".repeat(40);
        for line in wrap_paragraph(&text, metrics, &cfg) {
            let width = metrics.measure_pt(&line, cfg.font_size);
            assert!(
                width <= cfg.max_text_width() + 1e-3,
                "line wider than limit: {width}pt for {line:?}"
            );
        }
    }

    #[test]
    fn test_wrap_overlong_word_occupies_own_line() {
        // A single unbreakable token wider than the text area.
        let giant = "x".repeat(200);
        let text = format!("short {giant} short");
        let lines = wrap_paragraph(&text, helvetica(), &config());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "short");
        assert_eq!(lines[1], giant);
        assert_eq!(lines[2], "short");
    }

    #[test]
    fn test_wrap_fills_greedily() {
        // 18 repetitions of "word" fit on one 532pt line at 12pt; the 19th wraps.
        let text = "word ".repeat(19);
        let lines = wrap_paragraph(text.trim_end(), helvetica(), &config());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().count(), 18);
        assert_eq!(lines[1], "word");
    }

    // ── paginate ────────────────────────────────────────────────────────────

    #[test]
    fn test_paginate_empty_text_yields_single_empty_page() {
        let pages = paginate("", helvetica(), &config());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn test_paginate_first_line_at_top_margin() {
        let pages = paginate("Dear Hiring Manager,", helvetica(), &config());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
        assert_eq!(pages[0].lines[0].y, 752.0);
    }

    #[test]
    fn test_paginate_lines_descend_by_line_height() {
        let pages = paginate("first paragraph\nsecond paragraph", helvetica(), &config());
        let lines = &pages[0].lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].y, 752.0);
        assert_eq!(lines[1].y, 738.0);
    }

    #[test]
    fn test_paginate_blank_paragraph_advances_cursor() {
        let pages = paginate("above\n\nbelow", helvetica(), &config());
        let lines = &pages[0].lines;
        // The blank middle paragraph is not drawn but consumes one line height.
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "above");
        assert_eq!(lines[0].y, 752.0);
        assert_eq!(lines[1].text, "below");
        assert_eq!(lines[1].y, 752.0 - 2.0 * 14.0);
    }

    #[test]
    fn test_paginate_page_holds_fifty_lines() {
        // 50 single-word paragraphs fill page one; the 51st line must not fit:
        // line 50 sits at y = 752 - 49*14 = 66, line 51 would sit at 52 < 54.
        let text = vec!["line"; 50].join("\n");
        let pages = paginate(&text, helvetica(), &config());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 50);
        assert_eq!(pages[0].lines[49].y, 66.0);
    }

    #[test]
    fn test_paginate_overflow_starts_new_page_at_top() {
        let text = vec!["line"; 51].join("\n");
        let pages = paginate(&text, helvetica(), &config());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 50);
        assert_eq!(pages[1].lines.len(), 1);
        assert_eq!(pages[1].lines[0].y, 752.0);
    }

    #[test]
    fn test_paginate_long_wrapped_paragraph_spans_pages() {
        // 1000 words at 18 per line wrap to 56 lines → 50 on page one, 6 on page two.
        let text = "word ".repeat(1000);
        let pages = paginate(text.trim_end(), helvetica(), &config());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 50);
        assert_eq!(pages[1].lines.len(), 6);
        for page in &pages {
            assert_eq!(page.lines[0].y, 752.0, "each page starts at the top margin");
        }
    }

    #[test]
    fn test_paginate_trailing_newline_adds_no_page() {
        let pages = paginate("only line\n", helvetica(), &config());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
    }
}
