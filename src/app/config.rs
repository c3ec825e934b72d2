use crate::components::lane_graph::DEFAULT_LANE_WIDTH;
use crate::domain::palette::LanePalette;
use crate::theme::{PaletteType, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub palette: PaletteType,
    // Overrides the lane colors of the selected palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_colors: Option<Vec<String>>,
    pub lane_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: PaletteType::default(),
            lane_colors: None,
            lane_width: DEFAULT_LANE_WIDTH,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("lanes");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    /// An explicit path must exist. Without one, the file under the home
    /// directory is read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match get_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str::<Self>(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), palette = config.palette.label(), "loaded config");
        Ok(config)
    }

    pub fn theme(&self) -> Result<Theme> {
        let theme = Theme::from_palette_type(self.palette);
        match &self.lane_colors {
            Some(colors) => {
                let lanes =
                    LanePalette::from_hex(colors).context("Invalid lane_colors in config")?;
                Ok(theme.with_lanes(lanes))
            }
            None => Ok(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_for_empty_file() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lane_width, 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "palette = \"nord\"").unwrap();
        writeln!(file, "lane_width = 3").unwrap();
        writeln!(file, "lane_colors = [\"#ff0000\", \"#00ff00\"]").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.palette, PaletteType::Nord);
        assert_eq!(config.lane_width, 3);

        let theme = config.theme().unwrap();
        assert_eq!(theme.lanes.len(), 2);
        assert_eq!(theme.lanes.color_for(3).as_str(), "#00ff00");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "palette = \"solarized\"").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_invalid_lane_colors() {
        let config = AppConfig {
            lane_colors: Some(vec![]),
            ..Default::default()
        };
        assert!(config.theme().is_err());

        let config = AppConfig {
            lane_colors: Some(vec!["blue".to_string()]),
            ..Default::default()
        };
        let err = config.theme().unwrap_err();
        assert!(format!("{err:#}").contains("invalid lane color"));
    }

    #[test]
    fn test_round_trip_without_overrides() {
        let config = AppConfig {
            palette: PaletteType::Gruvbox,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("palette = \"gruvbox\""));
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), config);
    }
}
