//! Filesystem repository adapter for voice profiles
//!
//! One JSON document per user: {base_dir}/voice_profiles/{encoded_user_id}.json

use async_trait::async_trait;
use std::fmt::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::voice::VoiceProfile;
use crate::ports::VoiceProfileRepository;

const PROFILE_SUBDIR: &str = "voice_profiles";

/// Filesystem-based voice profile storage
pub struct FsVoiceProfileRepository {
    base_dir: PathBuf,
}

impl FsVoiceProfileRepository {
    /// Create new filesystem repository with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profile_dir(&self) -> PathBuf {
        self.base_dir.join(PROFILE_SUBDIR)
    }

    /// Full path to a user's profile file
    pub fn profile_path(&self, user_id: &UserId) -> PathBuf {
        self.profile_dir()
            .join(format!("{}.json", encode_file_stem(user_id.as_str())))
    }
}

/// Percent-encodes everything outside `[A-Za-z0-9_-]`, so distinct user ids
/// always map to distinct, traversal-free file names.
fn encode_file_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{:02X}", byte);
        }
    }
    out
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::new(
        ErrorCode::StorageError,
        format!("Failed to {} voice profile: {}", action, err),
    )
    .with_detail("path", path.display().to_string())
}

#[async_trait]
impl VoiceProfileRepository for FsVoiceProfileRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<VoiceProfile>, DomainError> {
        let path = self.profile_path(user_id);

        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("read", &path, e)),
        };

        let profile = serde_json::from_str(&json).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Corrupt voice profile: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })?;
        Ok(Some(profile))
    }

    async fn save(&self, profile: &VoiceProfile) -> Result<(), DomainError> {
        let path = self.profile_path(profile.user_id());
        let json = serde_json::to_string_pretty(profile).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize voice profile: {}", e),
            )
        })?;

        let dir = self.profile_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| storage_error("create directory for", &dir, e))?;

        // Write to a sibling temp file, then rename over the target.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| storage_error("write", &temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(storage_error("rename", &path, e));
        }

        debug!(user_id = %profile.user_id(), path = %path.display(), "Voice profile saved");
        Ok(())
    }

    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let path = self.profile_path(user_id);
        fs::try_exists(&path)
            .await
            .map_err(|e| storage_error("stat", &path, e))
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        let path = self.profile_path(user_id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("delete", &path, e)),
        }
    }
}
