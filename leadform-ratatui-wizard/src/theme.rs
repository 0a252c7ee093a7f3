use ratatui::style::Color;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::LightBlue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
        }
    }
}
