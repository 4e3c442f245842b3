use crate::error::{ConfigError, ConfigResult};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Colors used across the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
}

impl ColorPalette {
    /// Warm light palette
    pub fn padaria() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),
            surface: Color::Rgb(255, 255, 255),
            text_primary: Color::Rgb(40, 40, 40),
            text_secondary: Color::Rgb(90, 80, 70),
            text_muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(176, 104, 40),
            selection: Color::Rgb(221, 221, 221),
            selection_text: Color::Rgb(40, 40, 40),
            success: Color::Rgb(56, 142, 60),
            error: Color::Rgb(198, 40, 40),
            info: Color::Rgb(33, 150, 243),
            accent: Color::Rgb(176, 104, 40),
        }
    }

    /// Dark palette (gruvbox-like)
    pub fn escuro() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),
            surface: Color::Rgb(50, 48, 47),
            text_primary: Color::Rgb(235, 219, 178),
            text_secondary: Color::Rgb(213, 196, 161),
            text_muted: Color::Rgb(146, 131, 116),
            border: Color::Rgb(102, 92, 84),
            border_focused: Color::Rgb(250, 189, 47),
            selection: Color::Rgb(80, 73, 69),
            selection_text: Color::Rgb(251, 241, 199),
            success: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            info: Color::Rgb(131, 165, 152),
            accent: Color::Rgb(254, 128, 25),
        }
    }
}

/// Named theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub palette: ColorPalette,
}

impl Theme {
    pub fn padaria() -> Self {
        Self {
            name: "padaria".to_string(),
            description: "Light theme with warm accents".to_string(),
            palette: ColorPalette::padaria(),
        }
    }

    pub fn escuro() -> Self {
        Self {
            name: "escuro".to_string(),
            description: "Dark theme with earthy colors".to_string(),
            palette: ColorPalette::escuro(),
        }
    }

    /// All built-in themes
    pub fn builtin() -> Vec<Theme> {
        vec![Theme::padaria(), Theme::escuro()]
    }

    /// Look up a built-in theme by name
    pub fn by_name(name: &str) -> ConfigResult<Theme> {
        Self::builtin()
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .bg(self.palette.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    /// Border of an input, highlighted when it has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border)
        }
    }

    pub fn input(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .bg(self.palette.surface)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_text)
            .bg(self.palette.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.surface)
                .bg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.accent)
        }
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::padaria()
    }
}
