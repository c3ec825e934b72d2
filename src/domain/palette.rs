use crate::domain::models::LaneColor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("lane palette must contain at least one color")]
    Empty,
    #[error("invalid lane color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Ordered list of lane colors. A lane's color is `colors[lane % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanePalette {
    colors: Vec<LaneColor>,
}

impl LanePalette {
    pub fn new(colors: Vec<LaneColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Non-empty by construction.
    pub fn with_first(first: LaneColor, rest: Vec<LaneColor>) -> Self {
        let mut colors = Vec::with_capacity(rest.len() + 1);
        colors.push(first);
        colors.extend(rest);
        Self { colors }
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|c| {
                LaneColor::parse(c.as_ref())
                    .ok_or_else(|| PaletteError::InvalidColor(c.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    pub fn color_for(&self, lane: usize) -> LaneColor {
        self.colors[lane % self.colors.len()].clone()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
