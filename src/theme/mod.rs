use crate::domain::palette::LanePalette;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{lane_color, terminal_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub graph_node: Style,

    pub commit_id: Style,
    pub subject: Style,
    pub subject_empty: Style,

    pub lanes: LanePalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        match self {
            PaletteType::CatppuccinMocha => &catppuccin::CATPPUCCIN_MOCHA,
            PaletteType::Nord => &nord::NORD,
            PaletteType::Gruvbox => &gruvbox::GRUVBOX,
        }
    }
}

/// Twelve lane colors in the order lanes pick them up.
#[must_use]
pub fn lane_palette(p: &Palette) -> LanePalette {
    LanePalette::with_first(
        lane_color(p.red),
        vec![
            lane_color(p.green),
            lane_color(p.yellow),
            lane_color(p.blue),
            lane_color(p.mauve),
            lane_color(p.teal),
            lane_color(p.peach),
            lane_color(p.sapphire),
            lane_color(p.pink),
            lane_color(p.lavender),
            lane_color(p.maroon),
            lane_color(p.flamingo),
        ],
    )
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        Self::from_palette(t.palette())
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            graph_node: Style::default().add_modifier(Modifier::BOLD),

            commit_id: Style::default().fg(p.overlay1).add_modifier(Modifier::DIM),
            subject: Style::default().fg(p.text),
            subject_empty: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            lanes: lane_palette(p),
        }
    }

    /// Same styles, different lane colors.
    #[must_use]
    pub fn with_lanes(mut self, lanes: LanePalette) -> Self {
        self.lanes = lanes;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_every_palette_has_enough_lane_colors() {
        for t in PaletteType::value_variants() {
            let theme = Theme::from_palette_type(*t);
            assert!(theme.lanes.len() >= 10, "{}", t.label());
        }
    }

    #[test]
    fn test_default_lane_order() {
        let theme = Theme::default();
        assert_eq!(theme.lanes.color_for(0).as_str(), "#f38ba8");
        assert_eq!(theme.lanes.color_for(1).as_str(), "#a6e3a1");
        assert_eq!(theme.lanes.color_for(12), theme.lanes.color_for(0));
    }

    #[test]
    fn test_palette_type_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            palette: PaletteType,
        }
        let parsed: Wrapper = toml::from_str("palette = \"catppuccin-mocha\"").unwrap();
        assert_eq!(parsed.palette, PaletteType::CatppuccinMocha);
        let parsed: Wrapper = toml::from_str("palette = \"gruvbox\"").unwrap();
        assert_eq!(parsed.palette, PaletteType::Gruvbox);
    }
}
