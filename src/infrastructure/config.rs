//! Profile store management

use crate::error::{Result, SheetcastError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name given to the profile created by `sheetcast init`
pub const BOOTSTRAP_PROFILE: &str = "default-profile";

/// One messaging identity: agent, corp and secret, plus the default flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub agent_id: String,
    pub corp_id: String,
    pub corp_secret: String,
    #[serde(default)]
    pub default: bool,
}

impl Profile {
    /// A profile is usable only when all identity fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.agent_id.is_empty() && !self.corp_id.is_empty() && !self.corp_secret.is_empty()
    }
}

/// All named profiles, persisted as .sheetcast/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStore {
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl ProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        ProfileStore {
            created: Utc::now(),
            profiles: BTreeMap::new(),
        }
    }

    /// Create a store holding one blank profile flagged as default, ready to
    /// be filled in by the user
    pub fn bootstrap() -> Self {
        let mut store = Self::new();
        store.profiles.insert(
            BOOTSTRAP_PROFILE.to_string(),
            Profile {
                default: true,
                ..Profile::default()
            },
        );
        store
    }

    /// Load the store from .sheetcast/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".sheetcast").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SheetcastError::NotInitialized(path.to_path_buf())
            } else {
                SheetcastError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SheetcastError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save the store to .sheetcast/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let store_dir = path.join(".sheetcast");
        let config_path = store_dir.join("config.toml");

        if !store_dir.exists() {
            fs::create_dir(&store_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SheetcastError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the single profile flagged as default.
    ///
    /// Zero or multiple flagged profiles are configuration errors that name
    /// the offending sections.
    pub fn default_profile(&self) -> Result<(&str, &Profile)> {
        let flagged: Vec<(&str, &Profile)> = self
            .profiles
            .iter()
            .filter(|(_, p)| p.default)
            .map(|(n, p)| (n.as_str(), p))
            .collect();

        match flagged.len() {
            0 => Err(SheetcastError::Config(
                "No default profile configured".to_string(),
            )),
            1 => Ok(flagged[0]),
            _ => {
                let names: Vec<&str> = flagged.iter().map(|(n, _)| *n).collect();
                Err(SheetcastError::Config(format!(
                    "Multiple default profiles: {}",
                    names.join(", ")
                )))
            }
        }
    }

    /// Look up a profile and require all identity fields to be filled in
    pub fn validated(&self, name: &str) -> Result<&Profile> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| SheetcastError::ProfileNotFound(name.to_string()))?;

        if !profile.is_complete() {
            return Err(SheetcastError::Config(format!(
                "Profile '{}' is incomplete; agent-id, corp-id and corp-secret must all be set",
                name
            )));
        }

        Ok(profile)
    }

    /// Flag one profile as default and clear the flag on every other
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            return Err(SheetcastError::ProfileNotFound(name.to_string()));
        }

        for (profile_name, profile) in self.profiles.iter_mut() {
            profile.default = profile_name == name;
        }

        Ok(())
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
