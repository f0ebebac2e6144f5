//! Catppuccin variants

use ratatui::style::Color;

use crate::theme::Theme;

pub fn mocha() -> Theme {
    Theme {
        bg0: Color::Rgb(0x1e, 0x1e, 0x2e),
        bg1: Color::Rgb(0x18, 0x18, 0x25),
        bg2: Color::Rgb(0x31, 0x32, 0x44),
        fg0: Color::Rgb(0xcd, 0xd6, 0xf4),
        fg1: Color::Rgb(0xba, 0xc2, 0xde),
        muted: Color::Rgb(0x6c, 0x70, 0x86),
        accent: Color::Rgb(0xcb, 0xa6, 0xf7),
        error: Color::Rgb(0xf3, 0x8b, 0xa8),
        success: Color::Rgb(0xa6, 0xe3, 0xa1),
    }
}

pub fn latte() -> Theme {
    Theme {
        bg0: Color::Rgb(0xef, 0xf1, 0xf5),
        bg1: Color::Rgb(0xe6, 0xe9, 0xef),
        bg2: Color::Rgb(0xcc, 0xd0, 0xda),
        fg0: Color::Rgb(0x4c, 0x4f, 0x69),
        fg1: Color::Rgb(0x5c, 0x5f, 0x77),
        muted: Color::Rgb(0x8c, 0x8f, 0xa1),
        accent: Color::Rgb(0x88, 0x39, 0xef),
        error: Color::Rgb(0xd2, 0x0f, 0x39),
        success: Color::Rgb(0x40, 0xa0, 0x2b),
    }
}
