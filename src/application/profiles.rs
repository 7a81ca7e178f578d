//! Profile management use case

use crate::error::{Result, SheetcastError};
use crate::infrastructure::{ConfigRepository, FileSystemRepository, Profile};

/// Service for managing messaging profiles
pub struct ProfileService {
    repository: FileSystemRepository,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(repository: FileSystemRepository) -> Self {
        ProfileService { repository }
    }

    /// List all profiles with their settings, sorted by name
    pub fn list(&self) -> Result<Vec<(String, Profile)>> {
        let store = self.repository.load_store()?;
        Ok(store.profiles.into_iter().collect())
    }

    /// Show a single profile
    pub fn show(&self, name: &str) -> Result<Profile> {
        let store = self.repository.load_store()?;
        store
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| SheetcastError::ProfileNotFound(name.to_string()))
    }

    /// Add a new, blank profile
    pub fn add(&self, name: &str) -> Result<()> {
        let mut store = self.repository.load_store()?;

        if store.profiles.contains_key(name) {
            return Err(SheetcastError::Config(format!(
                "Profile name already exists: '{}'",
                name
            )));
        }

        store.profiles.insert(name.to_string(), Profile::default());
        self.repository.save_store(&store)
    }

    /// Remove a profile; the default profile cannot be removed
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut store = self.repository.load_store()?;

        let profile = store
            .profiles
            .get(name)
            .ok_or_else(|| SheetcastError::ProfileNotFound(name.to_string()))?;

        if profile.default {
            return Err(SheetcastError::Config(format!(
                "Cannot remove the default profile '{}'; mark another profile as default first",
                name
            )));
        }

        store.profiles.remove(name);
        self.repository.save_store(&store)
    }

    /// Rename a profile, keeping its settings and default flag
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        let mut store = self.repository.load_store()?;

        if store.profiles.contains_key(new) {
            return Err(SheetcastError::Config(format!(
                "Profile name already exists: '{}'",
                new
            )));
        }

        let profile = store
            .profiles
            .remove(old)
            .ok_or_else(|| SheetcastError::ProfileNotFound(old.to_string()))?;

        store.profiles.insert(new.to_string(), profile);
        self.repository.save_store(&store)
    }

    /// Set one identity field of a profile
    pub fn set_field(&self, name: &str, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(SheetcastError::Config(format!(
                "Value for '{}' must not be empty",
                key
            )));
        }

        let mut store = self.repository.load_store()?;

        let profile = store
            .profiles
            .get_mut(name)
            .ok_or_else(|| SheetcastError::ProfileNotFound(name.to_string()))?;

        match key {
            "agent-id" => profile.agent_id = value.to_string(),
            "corp-id" => profile.corp_id = value.to_string(),
            "corp-secret" => profile.corp_secret = value.to_string(),
            _ => {
                return Err(SheetcastError::Config(format!(
                    "Unknown profile key: '{}'. Valid keys are: agent-id, corp-id, corp-secret",
                    key
                )));
            }
        }

        self.repository.save_store(&store)
    }

    /// Flag a profile as the default, clearing the flag everywhere else
    pub fn set_default(&self, name: &str) -> Result<()> {
        let mut store = self.repository.load_store()?;
        store.set_default(name)?;
        self.repository.save_store(&store)
    }

    /// Resolve the profile to use for sending: an explicitly named one, or
    /// the store default. The result is validated for completeness.
    pub fn resolve(&self, name: Option<&str>) -> Result<(String, Profile)> {
        let store = self.repository.load_store()?;

        let resolved = match name {
            Some(n) => (n.to_string(), store.validated(n)?.clone()),
            None => {
                let (default_name, _) = store.default_profile()?;
                let default_name = default_name.to_string();
                let profile = store.validated(&default_name)?.clone();
                (default_name, profile)
            }
        };

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::infrastructure::BOOTSTRAP_PROFILE;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> ProfileService {
        init(temp.path()).unwrap();
        ProfileService::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    fn fill(service: &ProfileService, name: &str) {
        service.set_field(name, "agent-id", "1000002").unwrap();
        service.set_field(name, "corp-id", "ww0123").unwrap();
        service.set_field(name, "corp-secret", "secret").unwrap();
    }

    #[test]
    fn test_init_seeds_bootstrap_default() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let profiles = service.list().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].0, BOOTSTRAP_PROFILE);
        assert!(profiles[0].1.default);
    }

    #[test]
    fn test_add_and_show() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("work").unwrap();
        let profile = service.show("work").unwrap();
        assert!(!profile.default);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_add_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("work").unwrap();
        assert!(service.add("work").is_err());
    }

    #[test]
    fn test_remove_default_is_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let err = service.remove(BOOTSTRAP_PROFILE).unwrap_err();
        assert!(err.to_string().contains("default"));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_non_default() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("scratch").unwrap();
        service.remove("scratch").unwrap();
        assert!(service.show("scratch").is_err());
    }

    #[test]
    fn test_rename_keeps_settings() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("work").unwrap();
        fill(&service, "work");
        service.rename("work", "finance").unwrap();

        let profile = service.show("finance").unwrap();
        assert_eq!(profile.agent_id, "1000002");
        assert!(service.show("work").is_err());
    }

    #[test]
    fn test_set_field_rejects_empty_value() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert!(service
            .set_field(BOOTSTRAP_PROFILE, "agent-id", "  ")
            .is_err());
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let err = service
            .set_field(BOOTSTRAP_PROFILE, "token", "x")
            .unwrap_err();
        assert!(err.to_string().contains("Unknown profile key"));
    }

    #[test]
    fn test_set_default_moves_flag() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("work").unwrap();
        service.set_default("work").unwrap();

        assert!(service.show("work").unwrap().default);
        assert!(!service.show(BOOTSTRAP_PROFILE).unwrap().default);
    }

    #[test]
    fn test_resolve_named_profile() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.add("work").unwrap();
        fill(&service, "work");

        let (name, profile) = service.resolve(Some("work")).unwrap();
        assert_eq!(name, "work");
        assert!(profile.is_complete());
    }

    #[test]
    fn test_resolve_default_requires_complete_profile() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        // Bootstrap profile is default but blank
        let err = service.resolve(None).unwrap_err();
        assert!(err.to_string().contains("incomplete"));

        fill(&service, BOOTSTRAP_PROFILE);
        let (name, _) = service.resolve(None).unwrap();
        assert_eq!(name, BOOTSTRAP_PROFILE);
    }

    #[test]
    fn test_resolve_unknown_named_profile() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        match service.resolve(Some("ghost")).unwrap_err() {
            SheetcastError::ProfileNotFound(name) => assert_eq!(name, "ghost"),
            other => panic!("Expected ProfileNotFound, got {:?}", other),
        }
    }
}
