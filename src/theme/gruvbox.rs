use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    text: Color::Rgb(235, 219, 178),
    subtext0: Color::Rgb(168, 153, 132),
    overlay1: Color::Rgb(146, 131, 116),
    blue: Color::Rgb(131, 165, 152),
    lavender: Color::Rgb(215, 153, 33),
    sapphire: Color::Rgb(69, 133, 136),
    teal: Color::Rgb(104, 157, 106),
    green: Color::Rgb(184, 187, 38),
    yellow: Color::Rgb(250, 189, 47),
    peach: Color::Rgb(254, 128, 25),
    maroon: Color::Rgb(204, 36, 29),
    red: Color::Rgb(251, 73, 52),
    mauve: Color::Rgb(211, 134, 155),
    pink: Color::Rgb(177, 98, 134),
    flamingo: Color::Rgb(214, 93, 14),
};
