// Chunk: docs/chunks/document_model - Master document data structure

//! Symbols: one character plus optional hidden style codes.

use std::fmt;

/// A style code applied around a character when rendering styled text.
///
/// The code might be an HTML tag or some other formatting marker; the engine
/// never interprets it. Style codes are effectively hidden control
/// characters: they travel with the symbol, appear in styled output, and are
/// invisible to wrapping and location math.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolStyle {
    code: Option<String>,
}

impl SymbolStyle {
    /// No style code.
    pub fn none() -> Self {
        Self { code: None }
    }

    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_none()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for SymbolStyle {
    /// Empty string if no code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => f.write_str(code),
            None => Ok(()),
        }
    }
}

/// A character within a document.
///
/// `style_start` is applied before the character is displayed. `style_end`
/// is applied after it, mostly used to reset text back to the default style
/// once a styled run finishes.
///
/// Immutable; equality is by value. The `with_*` builders return updated
/// copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub character: char,
    pub style_start: SymbolStyle,
    pub style_end: SymbolStyle,
}

impl Symbol {
    /// A plain symbol with no styles attached.
    pub fn new(character: char) -> Self {
        Self {
            character,
            style_start: SymbolStyle::none(),
            style_end: SymbolStyle::none(),
        }
    }

    pub fn with_style_start(&self, style_start: SymbolStyle) -> Self {
        Self {
            character: self.character,
            style_start,
            style_end: self.style_end.clone(),
        }
    }

    pub fn with_style_end(&self, style_end: SymbolStyle) -> Self {
        Self {
            character: self.character,
            style_start: self.style_start.clone(),
            style_end,
        }
    }

    pub fn with_style(&self, style_start: SymbolStyle, style_end: SymbolStyle) -> Self {
        Self {
            character: self.character,
            style_start,
            style_end,
        }
    }

    /// The character with both style codes rendered around it.
    pub fn styled_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.style_start.to_string());
        text.push(self.character);
        text.push_str(&self.style_end.to_string());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_symbol() {
        let sym = Symbol::new('a');
        assert_eq!(sym.character, 'a');
        assert!(sym.style_start.is_empty());
        assert!(sym.style_end.is_empty());
        assert_eq!(sym.styled_text(), "a");
    }

    #[test]
    fn test_with_style_start() {
        let sym = Symbol::new('x').with_style_start(SymbolStyle::new("<b>"));
        assert_eq!(sym.styled_text(), "<b>x");
        // original is untouched
        assert_eq!(Symbol::new('x').styled_text(), "x");
    }

    #[test]
    fn test_with_style_both() {
        let sym = Symbol::new('x').with_style(SymbolStyle::new("<b>"), SymbolStyle::new("</b>"));
        assert_eq!(sym.styled_text(), "<b>x</b>");
    }

    #[test]
    fn test_value_equality() {
        let a = Symbol::new('q').with_style_end(SymbolStyle::new("</i>"));
        let b = Symbol::new('q').with_style_end(SymbolStyle::new("</i>"));
        assert_eq!(a, b);
        assert_ne!(a, Symbol::new('q'));
    }

    #[test]
    fn test_style_display_empty() {
        assert_eq!(SymbolStyle::none().to_string(), "");
        assert_eq!(SymbolStyle::new("§c").to_string(), "§c");
    }
}
