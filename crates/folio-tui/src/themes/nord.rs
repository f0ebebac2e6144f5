//! Nord

use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),
        bg1: Color::Rgb(0x3b, 0x42, 0x52),
        bg2: Color::Rgb(0x43, 0x4c, 0x5e),
        fg0: Color::Rgb(0xec, 0xef, 0xf4),
        fg1: Color::Rgb(0xd8, 0xde, 0xe9),
        muted: Color::Rgb(0x61, 0x6e, 0x88),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        error: Color::Rgb(0xbf, 0x61, 0x6a),
        success: Color::Rgb(0xa3, 0xbe, 0x8c),
    }
}
