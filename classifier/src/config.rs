// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{Dispatch, Section};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "classifier.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read \"{}\": {error}", path.display())]
    Io { path: PathBuf, error: std::io::Error },

    #[error("invalid configuration in \"{}\": {error}", path.display())]
    Parse { path: PathBuf, error: toml::de::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub output: ConfigSectionOutput,
    pub classify: ConfigSectionClassify,
}

impl ConfigRoot {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        Self::from_toml(path, &contents)
    }

    /// Loads the file at `path`, or the default file in the working directory
    /// if there is one. No file at all gives the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default_in(path, Path::new("."))
    }

    /// Same as [`Self::load_or_default`], looking for the default file in
    /// `directory` instead.
    pub fn load_or_default_in(path: Option<&Path>, directory: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let path = directory.join(DEFAULT_CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("Using configuration from {}", path.display());
            return Self::load(&path);
        }

        Ok(Self::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionOutput {
    pub color: bool,
    pub sections: Vec<Section>,
}

impl Default for ConfigSectionOutput {
    fn default() -> Self {
        Self {
            color: true,
            sections: Section::all(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionClassify {
    pub dispatch: Dispatch,
}
