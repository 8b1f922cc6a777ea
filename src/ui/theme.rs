#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::style::Color;

pub const CELL_TINT: Color = Color::Rgb(218, 64, 122);
pub const ICON_TINT: Color = Color::Rgb(119, 195, 68);
pub const BORDER: Color = Color::Rgb(30, 32, 36);
pub const FOCUS_BORDER: Color = Color::Rgb(250, 250, 250);
pub const TEXT: Color = Color::Rgb(255, 255, 255);
pub const MUTED_TEXT: Color = Color::Rgb(200, 204, 212);
pub const FLASH: Color = Color::Rgb(255, 255, 255);
pub const BOLT: Color = Color::Rgb(255, 244, 160);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

pub fn detect_color_capability() -> ColorCapability {
    let var = |name: &str| std::env::var(name).ok();
    capability_from_env(
        var("TERM").as_deref(),
        var("COLORTERM").as_deref(),
        var("NO_COLOR").as_deref(),
    )
}

/// `NO_COLOR` (when non-empty) and `TERM=dumb` pin the palette to the 16
/// basic colors; otherwise the richest advertised palette wins.
#[must_use]
pub fn capability_from_env(
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    let term = term.unwrap_or_default().to_ascii_lowercase();
    if no_color.is_some_and(|value| !value.is_empty()) || term == "dumb" {
        return ColorCapability::Basic16;
    }

    let direct = |value: &str| {
        value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
    };
    let colorterm = colorterm.unwrap_or_default().to_ascii_lowercase();
    if direct(&colorterm) || direct(&term) {
        ColorCapability::TrueColor
    } else if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Best-effort RGB value of a terminal color, used as the base for blending.
#[must_use]
pub fn color_to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::White => (255, 255, 255),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (96, 96, 96),
        Color::Red | Color::LightRed => (205, 49, 49),
        Color::Green | Color::LightGreen => (13, 188, 121),
        Color::Yellow | Color::LightYellow => (229, 229, 16),
        Color::Blue | Color::LightBlue => (36, 114, 200),
        Color::Magenta | Color::LightMagenta => (188, 63, 188),
        Color::Cyan | Color::LightCyan => (17, 168, 205),
        Color::Indexed(index @ 16..=231) => {
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            let cube = index - 16;
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        Color::Indexed(index @ 232..=255) => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
        _ => (0, 0, 0),
    }
}

#[must_use]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (ar, ag, ab) = color_to_rgb(a);
    let (br, bg, bb) = color_to_rgb(b);
    let mix = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
}

/// `tint` painted over `base` at the given opacity.
#[must_use]
pub fn tint_over(base: Color, tint: Color, alpha: f32) -> Color {
    lerp_color(base, tint, alpha)
}

/// Maps a color onto what the terminal can show. Colors that are already
/// indexed or named pass through untouched.
#[must_use]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    match capability {
        ColorCapability::TrueColor => color,
        ColorCapability::Xterm256 => xterm256_from_rgb(r, g, b),
        ColorCapability::Basic16 => basic16_from_rgb(r, g, b),
    }
}

/// Near-grays go to the 24-step gray ramp, everything else to the 6x6x6 cube.
fn xterm256_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let spread = r.max(g).max(b) - r.min(g).min(b);
    if spread < 8 {
        let level = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
        if (8..=238).contains(&level) {
            return Color::Indexed(232 + ((level - 8) / 10).min(23) as u8);
        }
    }
    let step = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
    Color::Indexed(16 + 36 * step(r) + 6 * step(g) + step(b))
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let light = (max + min) / 2.0;

    if max - min < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.45 => Color::DarkGray,
            l if l < 0.80 => Color::Gray,
            _ => Color::White,
        };
    }

    let bright = light > 0.55;
    let sector = if max == rf {
        ((gf - bf) / (max - min)).rem_euclid(6.0)
    } else if max == gf {
        (bf - rf) / (max - min) + 2.0
    } else {
        (rf - gf) / (max - min) + 4.0
    };
    let hue = sector * 60.0;

    match (hue, bright) {
        (h, false) if !(30.0..330.0).contains(&h) => Color::Red,
        (h, true) if !(30.0..330.0).contains(&h) => Color::LightRed,
        (h, false) if h < 90.0 => Color::Yellow,
        (h, true) if h < 90.0 => Color::LightYellow,
        (h, false) if h < 150.0 => Color::Green,
        (h, true) if h < 150.0 => Color::LightGreen,
        (h, false) if h < 210.0 => Color::Cyan,
        (h, true) if h < 210.0 => Color::LightCyan,
        (h, false) if h < 270.0 => Color::Blue,
        (h, true) if h < 270.0 => Color::LightBlue,
        (_, false) => Color::Magenta,
        (_, true) => Color::LightMagenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(lerp_color(a, b, 7.0), b);
    }

    #[test]
    fn selected_tint_lets_backdrop_through() {
        let base = Color::Rgb(0, 0, 0);
        assert_eq!(tint_over(base, CELL_TINT, 1.0), CELL_TINT);
        assert_eq!(tint_over(base, CELL_TINT, 0.5), Color::Rgb(109, 32, 61));
    }

    #[test]
    fn quantize_respects_capability() {
        let color = Color::Rgb(30, 60, 200);
        assert_eq!(quantize(color, ColorCapability::TrueColor), color);
        assert!(matches!(
            quantize(color, ColorCapability::Xterm256),
            Color::Indexed(_)
        ));
        assert_eq!(quantize(color, ColorCapability::Basic16), Color::Blue);
        assert_eq!(
            quantize(Color::Rgb(250, 250, 250), ColorCapability::Basic16),
            Color::White
        );
    }

    #[test]
    fn capability_follows_terminal_env() {
        assert_eq!(
            capability_from_env(Some("xterm-256color"), Some("truecolor"), None),
            ColorCapability::TrueColor
        );
        assert_eq!(
            capability_from_env(Some("xterm-direct"), None, None),
            ColorCapability::TrueColor
        );
        assert_eq!(
            capability_from_env(Some("screen-256color"), None, None),
            ColorCapability::Xterm256
        );
        assert_eq!(capability_from_env(Some("vt100"), None, None), ColorCapability::Basic16);
        assert_eq!(capability_from_env(None, None, None), ColorCapability::Basic16);
    }

    #[test]
    fn dumb_terminal_and_no_color_force_basic_palette() {
        assert_eq!(
            capability_from_env(Some("dumb"), Some("truecolor"), None),
            ColorCapability::Basic16
        );
        assert_eq!(
            capability_from_env(Some("xterm-256color"), Some("24bit"), Some("1")),
            ColorCapability::Basic16
        );
        // an empty NO_COLOR does not count
        assert_eq!(
            capability_from_env(Some("xterm-256color"), None, Some("")),
            ColorCapability::Xterm256
        );
    }

    #[test]
    fn grays_use_the_xterm_ramp() {
        assert_eq!(
            quantize(Color::Rgb(128, 128, 128), ColorCapability::Xterm256),
            Color::Indexed(244)
        );
        assert_eq!(
            quantize(Color::Rgb(0, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(16)
        );
        assert_eq!(
            quantize(Color::Rgb(255, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(196)
        );
        assert_eq!(quantize(Color::Cyan, ColorCapability::Xterm256), Color::Cyan);
    }

    #[test]
    fn indexed_colors_blend_from_their_rgb() {
        assert_eq!(color_to_rgb(Color::Indexed(16)), (0, 0, 0));
        assert_eq!(color_to_rgb(Color::Indexed(231)), (255, 255, 255));
        assert_eq!(color_to_rgb(Color::Indexed(196)), (255, 0, 0));
        assert_eq!(color_to_rgb(Color::Indexed(244)), (128, 128, 128));
    }
}
