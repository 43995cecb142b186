//! Gruvbox Material theme

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox Material dark
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),   // aqua
        highlight: Color::Rgb(0xd8, 0xa6, 0x57), // yellow
        selection: Color::Rgb(0x45, 0x40, 0x3d),
        error: Color::Rgb(0xea, 0x69, 0x62),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        info: Color::Rgb(0x7d, 0xae, 0xa3),
    }
}
