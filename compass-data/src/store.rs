//! File-backed profile persistence.

use camino::{Utf8Path, Utf8PathBuf};
use compass_core::{ProfileStore, ProfileStoreError, UserProfile};
use compass_fs::{read_if_exists, write_replacing};

/// Stores one profile as pretty-printed JSON at a fixed path.
///
/// A missing file loads as the default profile. Saving creates parent
/// directories and replaces the file in one rename.
///
/// # Examples
/// ```no_run
/// use compass_core::ProfileStore;
/// use compass_data::JsonProfileStore;
///
/// # fn main() -> Result<(), compass_core::ProfileStoreError> {
/// let store = JsonProfileStore::new("profiles/me.json");
/// let mut profile = store.load()?;
/// profile.save_career("data-scientist");
/// store.save(&profile)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonProfileStore {
    path: Utf8PathBuf,
}

impl JsonProfileStore {
    /// Store the profile at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the profile file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.to_string()
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Result<UserProfile, ProfileStoreError> {
        let bytes = read_if_exists(&self.path).map_err(|source| ProfileStoreError::Read {
            location: self.location(),
            source,
        })?;
        let Some(contents) = bytes else {
            log::debug!("no profile at {}, starting fresh", self.path);
            return Ok(UserProfile::default());
        };
        serde_json::from_slice(&contents).map_err(|source| ProfileStoreError::Decode {
            location: self.location(),
            source: Box::new(source),
        })
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        let mut contents =
            serde_json::to_vec_pretty(profile).map_err(|source| ProfileStoreError::Encode {
                location: self.location(),
                source: Box::new(source),
            })?;
        contents.push(b'\n');
        write_replacing(&self.path, &contents).map_err(|source| ProfileStoreError::Write {
            location: self.location(),
            source,
        })?;
        log::debug!("saved profile to {}", self.path);
        Ok(())
    }
}
