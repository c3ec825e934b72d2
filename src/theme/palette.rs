use crate::domain::models::LaneColor;
use ratatui::style::Color;

pub struct Palette {
    pub text: Color,
    pub subtext0: Color,
    pub overlay1: Color,
    pub blue: Color,
    pub lavender: Color,
    pub sapphire: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub maroon: Color,
    pub red: Color,
    pub mauve: Color,
    pub pink: Color,
    pub flamingo: Color,
}

/// Converts an `Rgb` palette color to a lane color.
///
/// Every built-in palette is defined in `Rgb`, so the black fallback for named
/// or indexed colors is unreachable from them.
pub fn lane_color(c: Color) -> LaneColor {
    debug_assert!(
        matches!(c, Color::Rgb(..)),
        "lane colors must be Rgb, got {c:?}"
    );
    if let Color::Rgb(r, g, b) = c {
        LaneColor::from_rgb(r, g, b)
    } else {
        LaneColor::from_rgb(0, 0, 0)
    }
}

pub fn terminal_color(c: &LaneColor) -> Color {
    let (r, g, b) = c.to_rgb();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let lane = lane_color(Color::Rgb(243, 139, 168));
        assert_eq!(lane.as_str(), "#f38ba8");
        assert_eq!(terminal_color(&lane), Color::Rgb(243, 139, 168));
    }

    #[test]
    fn test_builtin_palettes_are_rgb() {
        use crate::theme::PaletteType;
        use clap::ValueEnum;

        for t in PaletteType::value_variants() {
            let p = t.palette();
            for c in [p.text, p.subtext0, p.overlay1, p.red, p.green, p.blue, p.flamingo] {
                assert!(matches!(c, Color::Rgb(..)));
            }
        }
    }
}
