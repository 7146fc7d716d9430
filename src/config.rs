//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/reltree/reltree.toml`
//! 3. Local config: `<dir>/.reltree.toml`
//! 4. Environment variables: `RELTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-tunable settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Relations file used when a command omits its file argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,
}

impl Settings {
    /// Loads settings with layered precedence. `local_dir` is where the
    /// local `.reltree.toml` is searched, normally the working directory.
    pub fn load(local_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder
            .add_source(File::from(local_dir.join(".reltree.toml")).required(false))
            .add_source(Environment::with_prefix("RELTREE"));

        builder.build()?.try_deserialize()
    }

    /// Global config file path under the platform config directory.
    pub fn global_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "reltree").map(|dirs| dirs.config_dir().join("reltree.toml"))
    }

    /// Commented template written by `config init`.
    pub fn template() -> String {
        "\
# reltree configuration
#
# Relations file used when a command omits its file argument.
# default_file = \"relations.txt\"
"
        .to_string()
    }
}
