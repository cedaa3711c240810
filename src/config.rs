use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories_next::ProjectDirs;
use serde::Deserialize;

/// Service origin used when neither the config file nor `--url` set one.
pub const DEFAULT_URL: &str = "http://pasteit.sh";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the paste server.
    pub url: String,
    /// Request timeout; unset means the request waits on the network stack.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_owned(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load the config from `path`, or from the default location if no path
    /// is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        Ok(config.normalized())
    }

    /// `<config dir>/paste-cli/config.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("sh", "pasteit", "paste-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&source)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn normalized(mut self) -> Self {
        if self.url.trim().is_empty() {
            self.url = DEFAULT_URL.to_owned();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("url = \"http://localhost:8080\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn empty_url_falls_back_to_default() {
        let file = write_config("url = \"\"\ntimeout_secs = 5\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("url = [");
        assert!(Config::load(Some(file.path())).is_err());
    }
}
