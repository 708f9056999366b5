//! Display surfaces
//!
//! A display surface is a named region holding the text the user sees. The
//! engine only ever reads and writes through [`DisplaySurface`], so any
//! rendering target (a DOM element, a mock DOM, plain memory) can back it.

use crate::core::format_number;

/// A named text surface the calculator reads from and writes to
pub trait DisplaySurface {
    /// Returns the surface name (element id)
    fn name(&self) -> &str;

    /// Returns the raw text currently shown, empty when blank
    fn text(&self) -> String;

    /// Replaces the shown text
    fn write(&mut self, text: &str);

    /// Shows a number in its decimal string form
    fn write_number(&mut self, value: f64) {
        self.write(&format_number(value));
    }

    /// Returns the current text, or `None` when the surface is blank
    fn read_current(&self) -> Option<String> {
        let text = self.text();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// True if the current text contains a minus sign anywhere
    fn is_negative(&self) -> bool {
        self.text().contains('-')
    }
}

/// In-memory surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    name: String,
    text: String,
}

impl MemorySurface {
    /// Creates a blank surface
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
        }
    }

    /// Sets the initial text
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

impl DisplaySurface for MemorySurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn write(&mut self, text: &str) {
        tracing::trace!(surface = %self.name, text, "write");
        self.text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_new_is_blank() {
        let surface = MemorySurface::new("number");
        assert_eq!(surface.name(), "number");
        assert_eq!(surface.read_current(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut surface = MemorySurface::new("number");
        surface.write("42");
        assert_eq!(surface.read_current(), Some("42".to_string()));
    }

    #[test]
    fn test_write_empty_reads_none() {
        let mut surface = MemorySurface::new("number").with_text("7");
        surface.write("");
        assert_eq!(surface.read_current(), None);
    }

    #[test]
    fn test_write_number_uses_decimal_form() {
        let mut surface = MemorySurface::new("number");
        surface.write_number(10.0);
        assert_eq!(surface.text(), "10");
        surface.write_number(0.5);
        assert_eq!(surface.text(), "0.5");
    }

    #[test]
    fn test_is_negative() {
        assert!(MemorySurface::new("n").with_text("-3").is_negative());
        assert!(MemorySurface::new("n").with_text("-").is_negative());
        assert!(!MemorySurface::new("n").with_text("3").is_negative());
        assert!(!MemorySurface::new("n").is_negative());
    }

    #[test]
    fn test_is_negative_anywhere_in_text() {
        assert!(MemorySurface::new("n").with_text("1e-7").is_negative());
    }
}
