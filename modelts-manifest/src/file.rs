use std::path::{Path, PathBuf};

use crate::{Config, Result, config::parse_config};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "modelts.toml";

/// Represents a modelts.toml file with both raw content and parsed config.
#[derive(Debug, Clone)]
pub struct ModeltsToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ModeltsToml {
    /// Open and parse a modelts.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::io(&path, e))?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the file if it exists, otherwise fall back to the default config.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when the file does not exist).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory the configured paths are relative to.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// The config with every path resolved against [`Self::root`].
    pub fn rooted_config(&self) -> Config {
        self.config.clone().rooted_at(self.root())
    }
}
