use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds: screen, cards, bars
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foregrounds
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub highlight: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}
