//! In-memory profile repository.

use super::model::ProfileSnapshot;
use super::repository::ProfileRepository;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A [`ProfileRepository`] held entirely in process memory.
///
/// Used when no on-device storage is configured, and as a test double.
/// Nothing survives the process.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    snapshots: Mutex<HashMap<String, ProfileSnapshot>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self, persona_id: &str) -> Result<Option<ProfileSnapshot>> {
        Ok(self.snapshots.lock().unwrap().get(persona_id).cloned())
    }

    async fn save(&self, persona_id: &str, snapshot: &ProfileSnapshot) -> Result<()> {
        self.snapshots
            .lock()
            .unwrap()
            .insert(persona_id.to_string(), snapshot.clone());
        Ok(())
    }

    async fn delete(&self, persona_id: &str) -> Result<()> {
        self.snapshots.lock().unwrap().remove(persona_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::model::SessionState;

    #[tokio::test]
    async fn save_load_delete_round_trip() {
        let repository = InMemoryProfileRepository::new();
        let snapshot = SessionState::with_outfit("kitchen-apron").snapshot();

        assert!(repository.load("mae").await.unwrap().is_none());

        repository.save("mae", &snapshot).await.unwrap();
        assert_eq!(repository.load("mae").await.unwrap(), Some(snapshot));

        repository.delete("mae").await.unwrap();
        assert!(repository.load("mae").await.unwrap().is_none());
    }
}
