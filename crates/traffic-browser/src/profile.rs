use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Chrome user-data directory for one launch
pub struct ProfileManager {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileManager {
    /// Fresh profile, removed on drop
    pub fn temporary() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("traffic-profile-")
            .tempdir()?
            .keep();

        Ok(Self {
            path,
            is_temporary: true,
        })
    }

    /// Use (or create) a profile directory at `path`
    pub fn persistent(path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&path)?;

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// Persistent profile stored as `~/.traffic/profiles/<name>`
    pub fn named(name: &str) -> Result<Self> {
        Self::persistent(Self::named_path(name)?)
    }

    fn named_path(name: &str) -> Result<PathBuf> {
        validate_profile_name(name)?;

        let home = dirs::home_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?;

        Ok(home.join(".traffic").join("profiles").join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }

    /// Keep a temporary profile on disk after drop
    ///
    /// Needed when the browser outlives this process.
    pub fn retain(&mut self) {
        if self.is_temporary {
            tracing::debug!("Retaining temporary profile {}", self.path.display());
            self.is_temporary = false;
        }
    }
}

/// A profile name must stay a single directory under the profiles root
fn validate_profile_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\'])
        || Path::new(name).is_absolute();

    if invalid {
        return Err(Error::Browser(format!("Invalid profile name: {:?}", name)));
    }

    Ok(())
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                tracing::debug!("Failed to remove profile {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_profile_creates_and_cleans_up() {
        let profile = ProfileManager::temporary().unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.is_dir());
        assert!(profile.is_temporary());

        drop(profile);
        assert!(!path.exists());
    }

    #[test]
    fn test_retained_temp_profile_survives_drop() {
        let mut profile = ProfileManager::temporary().unwrap();
        let path = profile.path().to_path_buf();

        profile.retain();
        drop(profile);

        assert!(path.exists());
        std::fs::remove_dir_all(path).unwrap();
    }

    #[test]
    fn test_persistent_profile_creates_directory_and_survives() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("nested").join("work");

        let profile = ProfileManager::persistent(profile_path.clone()).unwrap();
        assert!(profile_path.is_dir());
        assert!(!profile.is_temporary());

        drop(profile);
        assert!(profile_path.exists());
    }

    #[test]
    fn test_profile_names_must_stay_in_profiles_dir() {
        for name in ["", "  ", ".", "..", "../x", "a/b", "a\\b", "/etc", "x.."] {
            let err = ProfileManager::named_path(name).unwrap_err();
            assert!(
                err.to_string().contains("Invalid profile name"),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn test_plain_profile_names_accepted() {
        for name in ["work", "default", "client.acme", "my-profile_2"] {
            assert!(ProfileManager::named_path(name).is_ok(), "rejected {:?}", name);
        }
    }

    #[test]
    fn test_named_profile_lives_under_home() {
        let path = ProfileManager::named_path("work").unwrap();
        assert!(path.ends_with(".traffic/profiles/work"));
    }
}
