use super::config::AppConfig;
use crate::domain::source::CommitSource;
use crate::infrastructure::file_source::{FileSource, StdinSource};
use crate::theme::PaletteType;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored drawing, plain when stdout is not a terminal
    Graph,
    /// Drawing without escape codes
    Plain,
    /// Lane assignment as TOML, for other renderers
    Toml,
}

#[derive(Parser, Debug)]
#[command(
    name = "lanes",
    version,
    about = "Draw a commit history as a lane graph",
    long_about = "Reads commits ordered children before parents, one per line as \
    `<hash> [<parent>...]` optionally followed by a tab and a subject. \
    `git log --topo-order --format='%H %P%x09%s' | lanes` draws the current history."
)]
pub struct Cli {
    #[arg(index = 1, help = "Commit record file, '-' or nothing for stdin")]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Graph)]
    pub format: OutputFormat,

    #[arg(short, long, value_enum, help = "Color palette, overrides the config file")]
    pub palette: Option<PaletteType>,

    #[arg(long, help = "Terminal columns per lane")]
    pub lane_width: Option<u16>,

    #[arg(short, long, help = "Config file, defaults to ~/.config/lanes/config.toml")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn source(&self) -> Box<dyn CommitSource> {
        match &self.input {
            Some(path) if path != Path::new("-") => Box::new(FileSource::new(path.clone())),
            _ => Box::new(StdinSource),
        }
    }

    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(palette) = self.palette {
            config.palette = palette;
        }
        if let Some(width) = self.lane_width {
            config.lane_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lanes"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Graph);
        assert!(cli.input.is_none());
        assert_eq!(cli.source().describe(), "<stdin>");
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "lanes",
            "history.txt",
            "--format",
            "toml",
            "--palette",
            "nord",
            "--lane-width",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Toml);
        assert_eq!(cli.source().describe(), "history.txt");

        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.palette, PaletteType::Nord);
        assert_eq!(config.lane_width, 3);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = Cli::try_parse_from(["lanes", "-"]).unwrap();
        assert_eq!(cli.source().describe(), "<stdin>");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lanes", "--format", "svg"]).is_err());
    }
}
