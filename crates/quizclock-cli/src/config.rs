//! Quiz configuration file.
//!
//! Looks for `quiz.toml` in the current directory unless a path is given.
//! Every field is optional; command-line flags win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the configuration file picked up from the current directory.
pub const CONFIG_FILE: &str = "quiz.toml";

/// Top-level quiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    /// CSV file with `prompt,answer` rows.
    #[serde(default = "default_file")]
    pub file: PathBuf,
    /// Time limit for the whole quiz, in seconds.
    #[serde(default = "default_limit")]
    pub limit_secs: u64,
    /// Shuffle the questions once before the quiz starts.
    #[serde(default)]
    pub shuffle: bool,
    /// Fixed shuffle seed, for a reproducible order.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_file() -> PathBuf {
    PathBuf::from("data/problems.csv")
}
fn default_limit() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            limit_secs: default_limit(),
            shuffle: false,
            seed: None,
        }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub file: Option<PathBuf>,
    pub limit_secs: Option<u64>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl QuizConfig {
    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(file) = overrides.file {
            self.file = file;
        }
        if let Some(limit) = overrides.limit_secs {
            self.limit_secs = limit;
        }
        self.shuffle |= overrides.shuffle;
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

/// Load config from an explicit path, or from `quiz.toml` if it exists.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(CONFIG_FILE)).filter(|p| p.exists()),
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(QuizConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.file, PathBuf::from("data/problems.csv"));
        assert_eq!(config.limit_secs, 30);
        assert!(!config.shuffle);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizConfig = toml::from_str("limit_secs = 10\nshuffle = true\n").unwrap();
        assert_eq!(config.limit_secs, 10);
        assert!(config.shuffle);
        assert_eq!(config.file, default_file());
    }

    #[test]
    fn flags_override_file() {
        let config = QuizConfig {
            file: PathBuf::from("a.csv"),
            limit_secs: 10,
            shuffle: true,
            seed: Some(1),
        }
        .with_overrides(Overrides {
            file: Some(PathBuf::from("b.csv")),
            limit_secs: Some(5),
            shuffle: false,
            seed: None,
        });
        assert_eq!(config.file, PathBuf::from("b.csv"));
        assert_eq!(config.limit_secs, 5);
        // --shuffle can only switch shuffling on.
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("no/such/quiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "file = \"q.csv\"\nseed = 9\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.file, PathBuf::from("q.csv"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.limit_secs, 30);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "limit_secs = \"soon\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
