//! Filesystem-backed profile repository.

use crate::paths::HearthPaths;
use crate::storage::AtomicJsonFile;
use async_trait::async_trait;
use hearth_core::error::Result;
use hearth_core::session::{ProfileRepository, ProfileSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// Persists one JSON snapshot per persona under a profiles directory.
///
/// ```text
/// profiles/
/// ├── auntie-mae.json
/// └── dr-feelgood.json
/// ```
///
/// Reads of malformed files return an error; the session store turns that
/// into the default state, so corruption costs stored history but never
/// breaks startup.
pub struct JsonProfileRepository {
    profiles_dir: PathBuf,
}

impl JsonProfileRepository {
    /// Creates a repository rooted at the given directory, creating it if
    /// needed.
    pub fn new(profiles_dir: impl AsRef<Path>) -> Result<Self> {
        let profiles_dir = profiles_dir.as_ref().to_path_buf();
        fs::create_dir_all(&profiles_dir)?;
        Ok(Self { profiles_dir })
    }

    /// Creates a repository at the default platform location.
    pub fn default_location() -> Result<Self> {
        Self::new(HearthPaths::profiles_dir()?)
    }

    fn file(&self, persona_id: &str) -> AtomicJsonFile<ProfileSnapshot> {
        AtomicJsonFile::new(self.profiles_dir.join(format!("{persona_id}.json")))
    }
}

#[async_trait]
impl ProfileRepository for JsonProfileRepository {
    async fn load(&self, persona_id: &str) -> Result<Option<ProfileSnapshot>> {
        self.file(persona_id).load()
    }

    async fn save(&self, persona_id: &str, snapshot: &ProfileSnapshot) -> Result<()> {
        self.file(persona_id).save(snapshot)
    }

    async fn delete(&self, persona_id: &str) -> Result<()> {
        self.file(persona_id).remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::memory::{MemoryDraft, MemoryEntry, MemoryKind};
    use hearth_core::session::{SessionState, SessionStore};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn snapshot_with_memory(content: &str) -> ProfileSnapshot {
        let mut state = SessionState::with_outfit("kitchen-apron");
        state.memories.push(MemoryEntry::new(MemoryDraft {
            kind: MemoryKind::Conversation,
            content: content.to_string(),
            user_input: None,
            response_text: None,
            emotion: None,
            tags: Vec::new(),
            importance: 5,
            context: "general".to_string(),
        }));
        state.snapshot()
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonProfileRepository::new(temp_dir.path()).unwrap();

        let snapshot = snapshot_with_memory("remembered");
        repository.save("auntie-mae", &snapshot).await.unwrap();

        let loaded = repository.load("auntie-mae").await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
        assert!(temp_dir.path().join("auntie-mae.json").exists());
    }

    #[tokio::test]
    async fn personas_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonProfileRepository::new(temp_dir.path()).unwrap();

        repository
            .save("auntie-mae", &snapshot_with_memory("mae's note"))
            .await
            .unwrap();

        assert!(repository.load("dr-feelgood").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonProfileRepository::new(temp_dir.path()).unwrap();

        repository
            .save("auntie-mae", &snapshot_with_memory("x"))
            .await
            .unwrap();
        repository.delete("auntie-mae").await.unwrap();
        repository.delete("auntie-mae").await.unwrap();

        assert!(repository.load("auntie-mae").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_file_errors_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonProfileRepository::new(temp_dir.path()).unwrap();

        fs::write(temp_dir.path().join("auntie-mae.json"), "{not json").unwrap();
        assert!(repository.load("auntie-mae").await.is_err());
    }

    #[tokio::test]
    async fn store_opens_with_defaults_over_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let repository = Arc::new(JsonProfileRepository::new(temp_dir.path()).unwrap());

        fs::write(temp_dir.path().join("auntie-mae.json"), "{not json").unwrap();

        // End to end: corruption degrades to the documented default state.
        let store = SessionStore::open("auntie-mae", "kitchen-apron", repository).await;
        let state = store.state().await;
        assert!(state.memories.is_empty());
        assert!(state.conversation_history.is_empty());
        assert_eq!(state.current_outfit, "kitchen-apron");
        assert_eq!(state.user_name, "");
    }
}
