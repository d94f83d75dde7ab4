// Chunk: docs/chunks/soft_wrap - Width-budget wrap scan

//! The wrap engine: derives viewport lines from master lines.
//!
//! Wrapping never spans master lines; each master line wraps independently
//! into one or more contiguous segments. The scan is a running pixel-width
//! budget: before a symbol is added, if it would push the current segment
//! past the wrap width, the segment is closed (`is_wrap = true`) and the
//! overflowing symbol starts the next one. A symbol is never dropped.
//!
//! Because symbols have per-character widths, this is a genuine scan
//! rather than column divmod arithmetic; it is still O(line length) per
//! line and runs only for the lines an edit touched (callers get that
//! granularity from the document's change reports).

use flowedit_document::{Document, DocumentLocation, Line};

use crate::font::Font;
use crate::viewport_line::{ViewportLine, ViewportSymbol};

/// Wraps every line of `document` at `wrap_width` pixels.
pub fn wrap_document(document: &Document, wrap_width: u32, font: &Font) -> Vec<ViewportLine> {
    debug_assert!(wrap_width > 0);

    let mut lines = Vec::with_capacity(document.line_count());
    for (master_line, line) in document.lines().iter().enumerate() {
        wrap_line(line, master_line, wrap_width, font, &mut lines);
    }
    lines
}

/// Emits every master line as a single unwrapped viewport line, ignoring
/// widths entirely.
pub fn unwrapped_document(document: &Document, font: &Font) -> Vec<ViewportLine> {
    document
        .lines()
        .iter()
        .enumerate()
        .map(|(master_line, line)| {
            let symbols = measure_line(line, font);
            ViewportLine::new(DocumentLocation::new(master_line, 0), symbols, false)
        })
        .collect()
}

fn measure_line(line: &Line, font: &Font) -> Vec<ViewportSymbol> {
    line.symbols()
        .iter()
        .map(|symbol| ViewportSymbol::new(symbol.clone(), font))
        .collect()
}

/// Wraps one master line, appending its segments to `out`.
///
/// A segment always accepts its first symbol, even one wider than the
/// whole budget, so pathological wrap widths degrade to one oversized
/// symbol per segment instead of losing text. A properly configured wrap
/// width fits at least one symbol; the degenerate case is flagged in
/// debug builds.
fn wrap_line(
    line: &Line,
    master_line: usize,
    wrap_width: u32,
    font: &Font,
    out: &mut Vec<ViewportLine>,
) {
    if line.is_empty() {
        // An empty line still occupies one viewport line.
        out.push(ViewportLine::empty_at(DocumentLocation::new(master_line, 0)));
        return;
    }

    let mut segment: Vec<ViewportSymbol> = Vec::new();
    let mut segment_start = 0usize;
    let mut segment_width = 0u32;

    for (index, symbol) in line.symbols().iter().enumerate() {
        let measured = ViewportSymbol::new(symbol.clone(), font);

        if segment_width + measured.width > wrap_width {
            if segment.is_empty() {
                // First symbol of the segment overflows on its own; the
                // wrap width cannot fit a single character. Keep it rather
                // than drop it.
                debug_assert!(
                    false,
                    "wrap width {wrap_width} is not large enough to fit one symbol"
                );
            } else {
                // Hit the right edge: close this segment and start the
                // next one at the current symbol.
                out.push(ViewportLine::new(
                    DocumentLocation::new(master_line, segment_start),
                    std::mem::take(&mut segment),
                    true,
                ));
                segment_start = index;
                segment_width = 0;
            }
        }

        segment_width += measured.width;
        segment.push(measured);
    }

    // The remaining symbols are the final segment of this master line;
    // only this one exposes the end-of-line cursor slot.
    debug_assert!(!segment.is_empty());
    out.push(ViewportLine::new(
        DocumentLocation::new(master_line, segment_start),
        segment,
        false,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Glyph;

    fn wrap_texts(text: &str, wrap_width: u32) -> Vec<(String, bool)> {
        let font = Font::monospace_ascii(8, 16);
        wrap_document(&Document::from_text(text), wrap_width, &font)
            .into_iter()
            .map(|line| (line.text(), line.is_wrap))
            .collect()
    }

    // ==================== Basic wrapping ====================

    #[test]
    fn test_short_line_does_not_wrap() {
        assert_eq!(wrap_texts("ab", 32), vec![("ab".into(), false)]);
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        // 4 chars at 8px exactly fill 32px
        assert_eq!(wrap_texts("abcd", 32), vec![("abcd".into(), false)]);
    }

    #[test]
    fn test_one_over_wraps() {
        assert_eq!(
            wrap_texts("abcde", 32),
            vec![("abcd".into(), true), ("e".into(), false)]
        );
    }

    #[test]
    fn test_two_character_budget() {
        // "cde" at a two-character budget: ["cd" wrap, "e" final]
        assert_eq!(
            wrap_texts("ab\ncde", 16),
            vec![
                ("ab".into(), false),
                ("cd".into(), true),
                ("e".into(), false)
            ]
        );
    }

    #[test]
    fn test_multiple_segments() {
        assert_eq!(
            wrap_texts("abcdefg", 16),
            vec![
                ("ab".into(), true),
                ("cd".into(), true),
                ("ef".into(), true),
                ("g".into(), false)
            ]
        );
    }

    #[test]
    fn test_empty_line_yields_one_segment() {
        assert_eq!(wrap_texts("", 16), vec![("".into(), false)]);
        assert_eq!(
            wrap_texts("ab\n\ncd", 32),
            vec![
                ("ab".into(), false),
                ("".into(), false),
                ("cd".into(), false)
            ]
        );
    }

    #[test]
    fn test_lines_wrap_independently() {
        // wrapping never spans master lines
        assert_eq!(
            wrap_texts("abc\nd", 16),
            vec![("ab".into(), true), ("c".into(), false), ("d".into(), false)]
        );
    }

    // ==================== Master mapping ====================

    #[test]
    fn test_segments_record_master_starts() {
        let font = Font::monospace_ascii(8, 16);
        let lines = wrap_document(&Document::from_text("abcde\nfg"), 16, &font);

        let starts: Vec<_> = lines.iter().map(|line| line.master_start).collect();
        assert_eq!(
            starts,
            vec![
                DocumentLocation::new(0, 0),
                DocumentLocation::new(0, 2),
                DocumentLocation::new(0, 4),
                DocumentLocation::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_wrap_coverage_reconstructs_master_lines() {
        let font = Font::monospace_ascii(8, 16);
        let document = Document::from_text("abcdefghij\n\nklm\nnopqrstuv");

        for wrap_width in [8, 16, 24, 80] {
            let lines = wrap_document(&document, wrap_width, &font);
            let mut rebuilt = vec![String::new(); document.line_count()];
            for line in &lines {
                rebuilt[line.master_start.line].push_str(&line.text());
            }
            for (master_line, text) in rebuilt.iter().enumerate() {
                assert_eq!(
                    text,
                    &document.line(master_line).unwrap().text(),
                    "width {wrap_width}, line {master_line}"
                );
            }
        }
    }

    // ==================== Variable widths ====================

    #[test]
    fn test_variable_width_wrap_point() {
        let font = Font::from_measure(" iw".chars(), 10, |character| {
            Some(match character {
                'i' => Glyph::new(2, 10),
                'w' => Glyph::new(10, 10),
                _ => Glyph::new(5, 10),
            })
        })
        .unwrap();

        // budget 12: "iw" fits exactly (2+10); the next 'i' overflows
        let lines = wrap_document(&Document::from_text("iwi"), 12, &font);
        let texts: Vec<_> = lines.iter().map(|line| line.text()).collect();
        assert_eq!(texts, vec!["iw", "i"]);

        // budget 11: 'w' overflows after 'i'
        let lines = wrap_document(&Document::from_text("iwi"), 11, &font);
        let texts: Vec<_> = lines.iter().map(|line| line.text()).collect();
        assert_eq!(texts, vec!["i", "wi"]);
    }

    // ==================== No-wrap mode ====================

    #[test]
    fn test_unwrapped_mode_ignores_width() {
        let font = Font::monospace_ascii(8, 16);
        let document = Document::from_text("abcdefghij\nk");
        let lines = unwrapped_document(&document, &font);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "abcdefghij");
        assert!(!lines[0].is_wrap);
        assert_eq!(lines[1].master_start, DocumentLocation::new(1, 0));
    }
}
