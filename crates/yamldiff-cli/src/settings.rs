//! Settings file support.
//!
//! ```toml
//! quiet = true
//!
//! [diff]
//! treat_empty_as_missing = true
//! treat_zero_as_missing = false
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use yamldiff_diff::DiffOptions;

use crate::cli::Cli;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quiet: bool,
    pub diff: DiffOptions,
}

impl Settings {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Layer command-line flags on top. Flags only switch settings on.
    pub fn with_flags(mut self, cli: &Cli) -> Self {
        self.quiet |= cli.quiet;
        self.diff.treat_empty_as_missing |= cli.ignore_empty_fields;
        self.diff.treat_zero_as_missing |= cli.ignore_zero_fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn parse_full_file() {
        let settings = Settings::from_toml(
            "quiet = true\n[diff]\ntreat_empty_as_missing = true\n",
        )
        .unwrap();
        assert!(settings.quiet);
        assert!(settings.diff.treat_empty_as_missing);
        assert!(!settings.diff.treat_zero_as_missing);
    }

    #[test]
    fn unknown_types_are_errors() {
        assert!(Settings::from_toml("quiet = \"yes\"\n").is_err());
    }

    #[test]
    fn flags_enable_but_never_disable() {
        let base = Settings::from_toml("[diff]\ntreat_zero_as_missing = true\n").unwrap();

        let cli = Cli::try_parse_from(["yaml-diff", "a", "b"]).unwrap();
        assert_eq!(base.with_flags(&cli), base);

        let args = ["yaml-diff", "--ignore-empty-fields", "-q", "a", "b"];
        let cli = Cli::try_parse_from(args).unwrap();
        let merged = base.with_flags(&cli);
        assert!(merged.quiet);
        assert!(merged.diff.treat_empty_as_missing);
        assert!(merged.diff.treat_zero_as_missing);
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[diff]\ntreat_empty_as_missing = true\n").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.diff.treat_empty_as_missing);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = std::env::temp_dir().join("yaml-diff-no-such-config.toml");
        assert!(Settings::load(&dir).is_err());
    }
}
