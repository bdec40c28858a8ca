//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the crate (`light`, the default, and `dark`).
//! Custom themes are loaded from TOML files.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#aaaaaa"
//! text_normal = "#262626"
//! text_dim = "#8c8c8c"
//! selection_fg = "#1890ff"
//! match_highlight_fg = "#262626"
//! match_highlight_bg = "#ffff00"
//! drag_handle_fg = "#bfbfbf"
//! search_bar_border = "#d9d9d9"
//! ```
//!
//! # Example
//!
//! ```rust
//! use docindex::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! print!("{}Colored{}", Theme::fg(&theme.colors.selection_fg), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{DocIndexError, Result};

/// Color scheme for menu rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#1890ff"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Month group header color.
    pub header_fg: String,

    pub text_normal: String,
    /// Secondary text (search placeholder, dialog hints).
    pub text_dim: String,

    /// Selected entry color.
    pub selection_fg: String,
    /// Optional background for the selected entry.
    #[serde(default)]
    pub selection_bg: Option<String>,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub drag_handle_fg: String,
    pub search_bar_border: String,
}

impl Theme {
    fn light() -> Self {
        Self {
            name: "light".to_string(),
            colors: ThemeColors {
                header_fg: "#aaaaaa".to_string(),
                text_normal: "#262626".to_string(),
                text_dim: "#8c8c8c".to_string(),
                selection_fg: "#1890ff".to_string(),
                selection_bg: None,
                match_highlight_fg: "#262626".to_string(),
                match_highlight_bg: "#ffff00".to_string(),
                drag_handle_fg: "#bfbfbf".to_string(),
                search_bar_border: "#d9d9d9".to_string(),
            },
        }
    }

    fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ThemeColors {
                header_fg: "#7f849c".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                selection_fg: "#89b4fa".to_string(),
                selection_bg: Some("#313244".to_string()),
                match_highlight_fg: "#1e1e2e".to_string(),
                match_highlight_bg: "#f9e2af".to_string(),
                drag_handle_fg: "#585b70".to_string(),
                search_bar_border: "#45475a".to_string(),
            },
        }
    }

    /// Loads a built-in theme by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocIndexError::Io`] if the file cannot be read and
    /// [`DocIndexError::Theme`] if its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| DocIndexError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
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
    /// The built-in `light` theme.
    fn default() -> Self {
        Self::light()
    }
}
