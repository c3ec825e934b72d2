use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(pub String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// First 8 characters, or the whole id when shorter.
    pub fn short(&self) -> &str {
        self.0.get(0..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One commit as handed over by the commit-data source.
///
/// `parent_hashes[0]` is the first parent; any further entries are merge sources.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: CommitId,
    pub parent_hashes: Vec<CommitId>,
    #[serde(default)]
    pub subject: String,
}

impl CommitRecord {
    pub fn new(hash: &str, parents: &[&str]) -> Self {
        Self {
            hash: CommitId::new(hash),
            parent_hashes: parents.iter().map(|p| CommitId::new(*p)).collect(),
            subject: String::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    Straight,
    MergeLeft,
    MergeRight,
    ForkLeft,
    ForkRight,
}

impl LineType {
    /// Merge line from `from` to `to`; left only when the target is strictly lower.
    pub fn merge(from: usize, to: usize) -> Self {
        if to < from {
            LineType::MergeLeft
        } else {
            LineType::MergeRight
        }
    }

    pub fn fork(from: usize, to: usize) -> Self {
        if to < from {
            LineType::ForkLeft
        } else {
            LineType::ForkRight
        }
    }

    pub fn is_straight(&self) -> bool {
        matches!(self, LineType::Straight)
    }
}

/// `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneColor(String);

impl LaneColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Accepts `#` followed by exactly six hex digits. Stored lowercase.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            self.0
                .get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

impl fmt::Display for LaneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDef {
    pub from_lane: usize,
    pub to_lane: usize,
    pub color: LaneColor,
    #[serde(rename = "type")]
    pub line_type: LineType,
}

impl LineDef {
    pub fn straight(lane: usize, color: LaneColor) -> Self {
        Self {
            from_lane: lane,
            to_lane: lane,
            color,
            line_type: LineType::Straight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneData {
    pub lane: usize,
    pub color: LaneColor,
    pub lines: Vec<LineDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRow {
    pub commit: CommitRecord,
    pub lane_data: LaneData,
}

impl GraphRow {
    /// Lines kept alive for lanes this commit does not touch.
    pub fn pass_through(&self) -> impl Iterator<Item = &LineDef> {
        let lane = self.lane_data.lane;
        self.lane_data
            .lines
            .iter()
            .filter(move |l| l.line_type.is_straight() && l.from_lane != lane)
    }
}

/// Output of one layout pass: every row plus the widest lane index in use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderPlan {
    pub max_lane: usize,
    pub rows: Vec<GraphRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_color_parse() {
        assert_eq!(
            LaneColor::parse("#F38BA8").map(|c| c.as_str().to_string()),
            Some("#f38ba8".to_string())
        );
        assert!(LaneColor::parse("f38ba8").is_none());
        assert!(LaneColor::parse("#f38ba").is_none());
        assert!(LaneColor::parse("#gggggg").is_none());
        assert_eq!(LaneColor::from_rgb(243, 139, 168).to_rgb(), (243, 139, 168));
    }

    #[test]
    fn test_line_direction() {
        assert_eq!(LineType::merge(1, 0), LineType::MergeLeft);
        assert_eq!(LineType::merge(0, 1), LineType::MergeRight);
        assert_eq!(LineType::merge(2, 2), LineType::MergeRight);
        assert_eq!(LineType::fork(3, 1), LineType::ForkLeft);
        assert_eq!(LineType::fork(0, 1), LineType::ForkRight);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(CommitId::new("0123456789abcdef").short(), "01234567");
        assert_eq!(CommitId::new("abc").short(), "abc");
    }
}
