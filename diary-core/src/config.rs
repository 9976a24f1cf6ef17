use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `diary_<date>.txt` files.
    pub entries_dir: PathBuf,
    /// Colour preference for the CLI ("auto", "always" or "never"). The CLI decides what an
    /// unset value means.
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    entries_dir: Option<PathBuf>,
    color: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that can't be read or parsed is reported and ignored; startup carries on
    /// with the defaults.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::config_file_paths()))
    }

    /// Replaces the entries directory, e.g. with one given on the command line.
    pub fn with_entries_dir(mut self, entries_dir: impl Into<PathBuf>) -> Self {
        self.entries_dir = entries_dir.into();
        self
    }

    fn load_from(candidates: &[PathBuf]) -> Self {
        let file_config = Self::read_file_config(candidates).unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let entries_dir = file_config
            .entries_dir
            .unwrap_or_else(Self::default_entries_dir);

        Self {
            entries_dir,
            color: file_config.color,
        }
    }

    /// Default entries root: `{data_dir}/diary/diary_entries`
    /// - macOS:   `~/Library/Application Support/diary/diary_entries`
    /// - Linux:   `$XDG_DATA_HOME/diary/diary_entries` or `~/.local/share/diary/diary_entries`
    /// - Windows: `%APPDATA%\diary\diary_entries`
    fn default_entries_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("diary").join("diary_entries")
        } else {
            PathBuf::from("./diary_entries")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("diary").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("diary").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config(candidates: &[PathBuf]) -> Result<FileConfig> {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "loading config");
            let s =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("diary").join("config.toml");
            let expected_native = b.config_dir().join("diary").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_entries_dir_and_color() {
        let toml = r#"
            entries_dir = "/tmp/my-diary"
            color = "never"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.entries_dir.as_deref(), Some(Path::new("/tmp/my-diary")));
        assert_eq!(fc.color.as_deref(), Some("never"));
    }

    #[test]
    fn parse_file_rejects_malformed_toml() {
        assert!(Config::parse_file("entries_dir = ").is_err());
    }

    #[test]
    fn load_from_uses_first_existing_file() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");
        let first = tmp.path().join("first.toml");
        let second = tmp.path().join("second.toml");
        fs::write(&first, "entries_dir = \"/tmp/first\"").unwrap();
        fs::write(&second, "entries_dir = \"/tmp/second\"").unwrap();

        let config = Config::load_from(&[missing, first, second]);
        assert_eq!(config.entries_dir, PathBuf::from("/tmp/first"));
    }

    #[test]
    fn load_from_ignores_malformed_file() {
        let tmp = tempdir().unwrap();
        let broken = tmp.path().join("config.toml");
        fs::write(&broken, "entries_dir = [ not toml").unwrap();

        let config = Config::load_from(&[broken]);
        assert!(config.entries_dir.ends_with("diary_entries"));
        assert!(config.color.is_none());
    }

    #[test]
    fn with_entries_dir_overrides_only_the_dir() {
        let config = Config::load_from(&[]);
        let config = Config {
            color: Some("always".to_string()),
            ..config
        }
        .with_entries_dir("/tmp/override");
        assert_eq!(config.entries_dir, PathBuf::from("/tmp/override"));
        assert_eq!(config.color.as_deref(), Some("always"));
    }

    #[test]
    fn empty_file_falls_back_to_default_dir() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc);
        assert!(config.entries_dir.ends_with("diary_entries"));
        assert!(config.color.is_none());
    }
}
