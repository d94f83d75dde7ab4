// Chunk: docs/chunks/soft_wrap - Integration tests for wrap coverage and mapping

//! Integration tests for soft wrapping and coordinate mapping.
//!
//! These exercise the wrap engine and the master/viewport mapping
//! together across many widths, checking the structural properties the
//! display layer depends on: segments reconstruct master lines exactly,
//! every master location maps to exactly one viewport location, and the
//! mapping round-trips.

use flowedit_document::{Document, DocumentLocation};
use flowedit_textarea::{Font, ViewportDocument};

fn derive(text: &str, size_x: u32) -> ViewportDocument {
    let font = Font::monospace_ascii(8, 16);
    ViewportDocument::derive(&Document::from_text(text), &font, size_x, 8, 16, true)
}

// =============================================================================
// Wrap coverage
// =============================================================================

#[test]
fn test_segments_reconstruct_master_lines_across_widths() {
    let text = "pack my box with five dozen liquor jugs\n\nshort\nxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";
    let master = Document::from_text(text);

    // content widths from one character up to beyond the longest line
    for size_x in [16, 24, 40, 88, 168, 400] {
        let view = derive(text, size_x);

        let mut rebuilt = vec![String::new(); master.line_count()];
        for line in view.lines() {
            rebuilt[line.master_start.line].push_str(&line.text());
        }

        for (index, line) in master.lines().iter().enumerate() {
            assert_eq!(rebuilt[index], line.text(), "size_x {size_x}, line {index}");
        }
    }
}

#[test]
fn test_wrap_only_subdivides() {
    let text = "aaaa\nbb\ncccccc";
    let master = Document::from_text(text);

    for size_x in [16, 24, 32, 400] {
        let view = derive(text, size_x);
        assert!(view.line_count() >= master.line_count());
    }
}

#[test]
fn test_only_final_segments_allow_end_of_line() {
    let view = derive("abcdefgh", 24); // 2-char segments
    let last = view.line_count() - 1;

    for index in 0..view.line_count() {
        let line = view.line(index).unwrap();
        assert_eq!(line.is_wrap, index != last);
        if line.is_wrap {
            assert_eq!(line.end_location(), line.len() - 1);
        } else {
            assert_eq!(line.end_location(), line.len());
        }
    }
}

// =============================================================================
// Mapping properties
// =============================================================================

#[test]
fn test_every_master_location_maps_uniquely() {
    let text = "abcdefg\n\nhij";
    let master = Document::from_text(text);

    for size_x in [16, 24, 40, 400] {
        let view = derive(text, size_x);

        for line in 0..master.line_count() {
            for symbol in 0..=master.line(line).unwrap().end_location() {
                let master_location = DocumentLocation::new(line, symbol);

                // exactly one segment's range contains the location
                let owners = view
                    .lines()
                    .iter()
                    .filter(|segment| segment.master_range().contains(master_location))
                    .count();
                assert_eq!(owners, 1, "size_x {size_x}, {master_location:?}");

                // and the mapping round-trips through it
                let viewport_location = view.to_viewport(master_location);
                assert!(view.location_check(viewport_location));
                assert_eq!(view.to_master(viewport_location), master_location);
            }
        }
    }
}

#[test]
fn test_wrapped_segment_end_maps_to_next_segment_start() {
    let view = derive("abcd", 24); // ["ab" wrap, "cd" final]

    // master symbol 2 ('c') begins the second segment
    let location = view.to_viewport(DocumentLocation::new(0, 2));
    assert_eq!(location.line, 1);
    assert_eq!(location.symbol, 0);
}

#[test]
fn test_styled_symbols_do_not_affect_wrap_or_mapping() {
    use flowedit_document::{Line, Symbol, SymbolStyle};

    let plain = Document::from_text("abcdef");
    let styled = Document::from_lines(vec![Line::from_symbols(
        "abcdef"
            .chars()
            .map(|character| {
                Symbol::new(character)
                    .with_style(SymbolStyle::new("<b>"), SymbolStyle::new("</b>"))
            })
            .collect(),
    )]);

    let font = Font::monospace_ascii(8, 16);
    let plain_view = ViewportDocument::derive(&plain, &font, 24, 8, 16, true);
    let styled_view = ViewportDocument::derive(&styled, &font, 24, 8, 16, true);

    assert_eq!(plain_view.line_count(), styled_view.line_count());
    for (a, b) in plain_view.lines().iter().zip(styled_view.lines()) {
        assert_eq!(a.text(), b.text());
        assert_eq!(a.master_start, b.master_start);
        assert_eq!(a.is_wrap, b.is_wrap);
    }

    // styles still travel with the symbols
    assert_eq!(styled_view.line(0).unwrap().styled_text(), "<b>a</b><b>b</b>");
}

// =============================================================================
// Pixel mapping
// =============================================================================

#[test]
fn test_pixel_positions_are_prefix_sums() {
    let view = derive("abcd", 400);
    let line = view.line(0).unwrap();

    let mut x = 0;
    for location in 0..=line.len() {
        assert_eq!(line.location_to_x(location), x);
        if location < line.len() {
            x += line.get(location).unwrap().width;
        }
    }
}

#[test]
fn test_nearest_location_partitions_the_line() {
    let view = derive("abcd", 400);
    let line = view.line(0).unwrap();

    // every pixel inside the line resolves to the symbol whose span holds it
    for x in 0..line.width() {
        let location = line.x_to_nearest_location(x as i32);
        let left = line.location_to_x(location);
        let right = left + line.get(location).unwrap().width;
        assert!(left <= x && x < right, "x {x} resolved to {location}");
    }
}
