// Chunk: docs/chunks/font_metrics - Per-character measure capability

//! Font metrics: the measure capability the engine consumes.
//!
//! The engine never rasterizes anything; it only needs "how wide is this
//! character, and how tall is a line". A [`Font`] is a fixed table of
//! per-character glyph sizes built up front from whatever measuring
//! facility the host has. Characters outside the table substitute the
//! space glyph, so measurement is total and predictable; the space
//! character itself is therefore required.

use std::collections::HashMap;

use unicode_width::UnicodeWidthChar;

/// Pixel size of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
}

impl Glyph {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A fixed character-size table plus a line height.
///
/// Each character has one size regardless of context; there is no kerning
/// or shaping. Unknown characters measure as the space glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
    space: Glyph,
    line_height: u32,
}

impl Font {
    /// Builds a font by measuring every character in `charset`.
    ///
    /// Returns `None` if the measure does not cover the space character or
    /// if the line height would be zero - a font that cannot place a
    /// cursor on an empty line is unusable.
    pub fn from_measure<I, F>(charset: I, line_height: u32, measure: F) -> Option<Self>
    where
        I: IntoIterator<Item = char>,
        F: Fn(char) -> Option<Glyph>,
    {
        if line_height == 0 {
            return None;
        }

        let mut glyphs = HashMap::new();
        for character in charset {
            if let Some(glyph) = measure(character) {
                glyphs.insert(character, glyph);
            }
        }

        let space = *glyphs.get(&' ')?;
        Some(Self {
            glyphs,
            space,
            line_height,
        })
    }

    /// A fixed-advance font covering the printable ASCII range.
    ///
    /// Double-width characters (per Unicode east-asian width) measure as
    /// two advances when added via [`Font::with_characters`].
    pub fn monospace_ascii(advance: u32, line_height: u32) -> Self {
        debug_assert!(advance > 0 && line_height > 0);

        let glyph = Glyph::new(advance, line_height);
        let glyphs = (' '..='~').map(|character| (character, glyph)).collect();

        Self {
            glyphs,
            space: glyph,
            line_height,
        }
    }

    /// Extends a monospace font's table with extra characters, sized by
    /// their Unicode display width (1 or 2 cells).
    pub fn with_characters<I: IntoIterator<Item = char>>(&self, charset: I) -> Self {
        let mut glyphs = self.glyphs.clone();
        for character in charset {
            let cells = character.width().unwrap_or(1).max(1) as u32;
            glyphs.insert(
                character,
                Glyph::new(self.space.width * cells, self.space.height),
            );
        }
        Self {
            glyphs,
            space: self.space,
            line_height: self.line_height,
        }
    }

    /// The glyph for a character; unknown characters substitute the space
    /// glyph.
    pub fn glyph(&self, character: char) -> Glyph {
        self.glyphs.get(&character).copied().unwrap_or(self.space)
    }

    pub fn contains(&self, character: char) -> bool {
        self.glyphs.contains_key(&character)
    }

    pub fn space(&self) -> Glyph {
        self.space
    }

    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Total width of a string at this font's metrics.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|character| self.glyph(character).width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_ascii() {
        let font = Font::monospace_ascii(8, 16);
        assert_eq!(font.glyph('a'), Glyph::new(8, 16));
        assert_eq!(font.glyph(' '), Glyph::new(8, 16));
        assert_eq!(font.line_height(), 16);
        assert!(font.contains('~'));
        assert!(!font.contains('\t'));
    }

    #[test]
    fn test_unknown_character_substitutes_space() {
        let font = Font::monospace_ascii(8, 16);
        assert_eq!(font.glyph('§'), font.space());
        assert_eq!(font.glyph('\t'), font.space());
    }

    #[test]
    fn test_from_measure_requires_space() {
        let measured = Font::from_measure("abc".chars(), 12, |_| Some(Glyph::new(6, 12)));
        assert!(measured.is_none(), "no space character in charset");

        let measured = Font::from_measure(" abc".chars(), 12, |_| Some(Glyph::new(6, 12)));
        assert!(measured.is_some());
    }

    #[test]
    fn test_from_measure_variable_widths() {
        let font = Font::from_measure(" iw".chars(), 10, |character| {
            Some(match character {
                'i' => Glyph::new(3, 10),
                'w' => Glyph::new(9, 10),
                _ => Glyph::new(5, 10),
            })
        })
        .unwrap();

        assert_eq!(font.glyph('i').width, 3);
        assert_eq!(font.glyph('w').width, 9);
        assert_eq!(font.text_width("iw"), 12);
    }

    #[test]
    fn test_with_characters_double_width() {
        let font = Font::monospace_ascii(8, 16).with_characters(['世', 'é']);
        assert_eq!(font.glyph('世').width, 16); // two cells
        assert_eq!(font.glyph('é').width, 8); // one cell
    }

    #[test]
    fn test_zero_line_height_rejected() {
        assert!(Font::from_measure(" ".chars(), 0, |_| Some(Glyph::new(1, 1))).is_none());
    }
}
