//! Persistence boundary for user profiles.
//!
//! Ranking never touches storage. Callers load a [`UserProfile`], apply
//! mutations, then hand it back to the store.

use thiserror::Error;

use crate::UserProfile;

/// Boxed error produced by a storage backend's codec.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by [`ProfileStore`] implementations.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// Reading the stored profile failed.
    #[error("failed to read profile from {location}")]
    Read {
        /// Where the store looked, e.g. a file path.
        location: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the profile failed.
    #[error("failed to write profile to {location}")]
    Write {
        /// Where the store tried to write.
        location: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The stored bytes could not be decoded into a profile.
    #[error("failed to decode profile from {location}")]
    Decode {
        /// Where the undecodable profile lives.
        location: String,
        /// Source error from the codec.
        #[source]
        source: CodecError,
    },
    /// The profile could not be encoded.
    #[error("failed to encode profile for {location}")]
    Encode {
        /// Intended destination.
        location: String,
        /// Source error from the codec.
        #[source]
        source: CodecError,
    },
}

/// Load and save a single user's profile.
///
/// A store that holds nothing yet must return [`UserProfile::default`]
/// from [`ProfileStore::load`] rather than an error.
///
/// # Examples
///
/// ```
/// use compass_core::{ProfileStore, UserProfile};
/// use compass_core::test_support::MemoryProfileStore;
///
/// # fn main() -> Result<(), compass_core::ProfileStoreError> {
/// let store = MemoryProfileStore::default();
/// let mut profile = store.load()?;
/// profile.save_career("ux-designer");
/// store.save(&profile)?;
/// assert!(store.load()?.is_career_saved("ux-designer"));
/// # Ok(())
/// # }
/// ```
pub trait ProfileStore {
    /// Fetch the stored profile, or the default profile when none exists.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError`] when the backend cannot be read or its
    /// contents cannot be decoded.
    fn load(&self) -> Result<UserProfile, ProfileStoreError>;

    /// Persist `profile`, replacing whatever was stored.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError`] when encoding or writing fails.
    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError>;
}
