//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

/// Error messages (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Routine headings (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Commands and names (blue).
pub fn code_style() -> Style {
    Style::new().blue()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    fn error(&self) -> String;
    fn muted(&self) -> String;
    fn header(&self) -> String;
    fn code(&self) -> String;
}

fn styled(value: &impl std::fmt::Display, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn error(&self) -> String {
        styled(self, error_style())
    }

    fn muted(&self) -> String {
        styled(self, muted_style())
    }

    fn header(&self) -> String {
        styled(self, header_style())
    }

    fn code(&self) -> String {
        styled(self, code_style())
    }
}
