//! Theme management and ANSI escape sequence generation.
//!
//! Two palettes are built in (`catppuccin-mocha`, the default, and
//! `catppuccin-latte`) plus `plain`, which emits no escape sequences at all and
//! is what tests and non-TTY output use. Custom palettes load from TOML:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! label_fg = "#89b4fa"
//! status_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! border = "#45475a"
//! ```

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the palette that renders without escape sequences.
pub const PLAIN: &str = "plain";

/// Color scheme for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    /// `None` renders plain text.
    #[serde(default)]
    pub colors: Option<ThemeColors>,
}

/// Hex colors (e.g. `"#cdd6f4"`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// View titles.
    pub title_fg: String,
    pub text_normal: String,
    /// Secondary lines such as glass and description.
    pub text_dim: String,
    /// Field labels in the detail view.
    pub label_fg: String,
    /// Loading and empty-state messages.
    pub status_fg: String,
    pub error_fg: String,
    /// Separator lines.
    pub border: String,
}

/// Visual role of a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    Normal,
    Dim,
    Label,
    Status,
    Error,
    Border,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cocktaildb::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let colors = match name {
            "catppuccin-mocha" => Some(ThemeColors {
                title_fg: "#cba6f7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                label_fg: "#89b4fa".to_string(),
                status_fg: "#f9e2af".to_string(),
                error_fg: "#f38ba8".to_string(),
                border: "#45475a".to_string(),
            }),
            "catppuccin-latte" => Some(ThemeColors {
                title_fg: "#8839ef".to_string(),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#9ca0b0".to_string(),
                label_fg: "#1e66f5".to_string(),
                status_fg: "#df8e1d".to_string(),
                error_fg: "#d20f39".to_string(),
                border: "#bcc0cc".to_string(),
            }),
            PLAIN => None,
            _ => return None,
        };

        Some(Self {
            name: name.to_string(),
            colors,
        })
    }

    /// Palette without escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: PLAIN.to_string(),
            colors: None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("failed to parse theme TOML: {e}")))
    }

    /// Wraps `text` in the escape sequences for `style`.
    #[must_use]
    pub fn paint(&self, style: Style, text: &str) -> String {
        let Some(colors) = &self.colors else {
            return text.to_string();
        };

        let hex = match style {
            Style::Title => &colors.title_fg,
            Style::Normal => &colors.text_normal,
            Style::Dim => &colors.text_dim,
            Style::Label => &colors.label_fg,
            Style::Status => &colors.status_fg,
            Style::Error => &colors.error_fg,
            Style::Border => &colors.border,
        };
        let bold = if style == Style::Title { Self::bold() } else { "" };

        format!("{bold}{}{text}{}", Self::fg(hex), Self::reset())
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(Self::plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        assert_eq!(Theme::plain().paint(Style::Error, "boom"), "boom");
        assert_eq!(Theme::from_name(PLAIN), Some(Theme::plain()));
    }

    #[test]
    fn colored_theme_wraps_in_escape_sequences() {
        let painted = Theme::default().paint(Style::Label, "glass");
        assert!(painted.starts_with("\u{001b}[38;2;137;180;250m"));
        assert!(painted.ends_with("glass\u{001b}[0m"));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"name = "mine"

[colors]
title_fg = "#000000"
text_normal = "#111111"
text_dim = "#222222"
label_fg = "#333333"
status_fg = "#444444"
error_fg = "#555555"
border = "#666666"
"##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors.unwrap().error_fg, "#555555");
    }

    #[test]
    fn invalid_theme_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Config(_))));
    }
}
