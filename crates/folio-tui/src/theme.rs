use folio_core::fx::timing::lerp_u8;
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        crate::themes::gruvbox::dark()
    }
}

/// Interpolate between two RGB colors
///
/// Used for the effect fade motion. Non-RGB colors can't be mixed in
/// terminal space; they resolve to whichever endpoint `t` is closer to.
pub fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            lerp_u8(r1, r2, t),
            lerp_u8(g1, g2, t),
            lerp_u8(b1, b2, t),
        ),
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_lerp_color_non_rgb_snaps() {
        let a = Color::Reset;
        let b = Color::Rgb(10, 10, 10);
        assert_eq!(lerp_color(a, b, 0.2), a);
        assert_eq!(lerp_color(a, b, 0.8), b);
    }
}
