//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/playerlist/playerlist.toml`
//! 3. Local config: `<dir>/.playerlist.toml`
//! 4. Environment variables: `PLAYERLIST_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{ListFormat, DEFAULT_SEPARATOR, EMPTY_LIST_MESSAGE};

/// Settings for rendering and locating rosters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Placed between rendered players (default: " -> ")
    pub separator: String,
    /// Shown for a list without players
    pub empty_message: String,
    /// Render tail to head by default
    pub reverse: bool,
    /// Roster used when none is given on the command line
    pub roster: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            empty_message: EMPTY_LIST_MESSAGE.to_string(),
            reverse: false,
            roster: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not set").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub separator: Option<String>,
    pub empty_message: Option<String>,
    pub reverse: Option<bool>,
    pub roster: Option<PathBuf>,
}

/// Get the XDG config directory for playerlist.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "playerlist").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("playerlist.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".playerlist.toml")
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Rendering options for [`PlayerList::display_with`](crate::domain::PlayerList::display_with).
    pub fn format(&self) -> ListFormat {
        ListFormat {
            separator: self.separator.clone(),
            empty_message: self.empty_message.clone(),
        }
    }

    /// Overlay wins for every field it sets.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            empty_message: overlay
                .empty_message
                .clone()
                .unwrap_or_else(|| self.empty_message.clone()),
            reverse: overlay.reverse.unwrap_or(self.reverse),
            roster: overlay.roster.clone().or_else(|| self.roster.clone()),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(roster) = &self.roster {
            self.roster = Some(PathBuf::from(expand_env_vars(
                roster.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.playerlist.toml`
    ///
    /// A relative `roster` from the local file is resolved against `local_dir`.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layered(global_config_path().as_deref(), local_dir, None)
    }

    /// Load settings from explicit sources.
    ///
    /// `global_path` replaces the XDG location; a missing file is skipped.
    /// `env` replaces the process environment when given (keys as they
    /// would appear in the environment, e.g. `PLAYERLIST_SEPARATOR`).
    pub fn load_layered(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let mut raw = load_raw_settings(&local_path)?;
                if let Some(roster) = raw.roster.take() {
                    let expanded = PathBuf::from(expand_env_vars(&roster.to_string_lossy()));
                    raw.roster = Some(if expanded.is_absolute() {
                        expanded
                    } else {
                        dir.join(expanded)
                    });
                }
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply PLAYERLIST_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PLAYERLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }
        if let Ok(val) = config.get_string("empty_message") {
            settings.empty_message = val;
        }
        if let Ok(val) = config.get_bool("reverse") {
            settings.reverse = val;
        }
        if let Ok(val) = config.get_string("roster") {
            settings.roster = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }

    /// Commented template written by `config init`.
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# playerlist configuration
#
# Precedence: defaults < global < local (.playerlist.toml) < PLAYERLIST_* env vars

# Placed between rendered players
separator = "{}"

# Shown for a list without players
empty_message = "{}"

# Render tail to head by default
reverse = {}

# Roster used when none is given on the command line
# roster = "~/rosters/team.toml"
"#,
            defaults.separator, defaults.empty_message, defaults.reverse
        )
    }
}
