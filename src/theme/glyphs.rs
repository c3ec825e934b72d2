// Node glyphs
pub const NODE: &str = "●";
pub const NODE_MERGE: &str = "◆";
pub const NODE_ROOT: &str = "○";

// Connector glyphs
pub const VERTICAL: &str = "│";
pub const HORIZONTAL: &str = "─";
pub const CROSS: &str = "┼";
pub const TEE_UP: &str = "┴";
pub const TEE_DOWN: &str = "┬";
pub const TEE_LEFT: &str = "┤";
pub const TEE_RIGHT: &str = "├";
pub const CORNER_LEFT_DOWN: &str = "╮";
pub const CORNER_RIGHT_DOWN: &str = "╭";
pub const CORNER_UP_LEFT: &str = "╯";
pub const CORNER_UP_RIGHT: &str = "╰";
