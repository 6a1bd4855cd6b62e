use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Replay a scoreboard command script and print the ranked summary
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Command script to replay (reads stdin when omitted)
    #[arg(long, env = "SCOREBOARD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// How summaries are printed
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report rejected commands as warnings and continue instead of stopping
    #[arg(long, env = "SCOREBOARD_KEEP_GOING", default_value = "false")]
    pub keep_going: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.script {
            if !path.is_file() {
                anyhow::bail!("script {} does not exist or is not a file", path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["live-scoreboard"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.keep_going);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "live-scoreboard",
            "--format",
            "json",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.keep_going);
    }

    #[test]
    fn test_validate_missing_script() {
        let config = Config::try_parse_from([
            "live-scoreboard",
            "--script",
            "/definitely/not/here.scoreboard",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
