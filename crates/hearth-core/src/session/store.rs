//! Session store: the single source of truth for one persona's state.

use super::action::Action;
use super::model::{ConversationTurn, PreferencesUpdate, SessionState};
use super::reducer::reduce;
use super::repository::ProfileRepository;
use crate::memory::{MemoryDraft, MemoryEntry};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Maximum number of memories returned by a relevance query.
pub const RELEVANT_MEMORY_LIMIT: usize = 5;

/// Owns the in-memory [`SessionState`] for one persona and its persistence.
///
/// A store is constructed explicitly at startup and handed to every widget
/// that needs it; there is no ambient singleton. All mutations go through the
/// pure reducer, and every mutation that touches the persisted subset writes
/// a fresh snapshot before the call returns. Persistence failures are logged
/// and swallowed - nothing here is fatal to the hosting application.
pub struct SessionStore {
    persona_id: String,
    state: RwLock<SessionState>,
    repository: Arc<dyn ProfileRepository>,
}

impl SessionStore {
    /// Opens the store for a persona, rehydrating from storage.
    ///
    /// Missing or malformed stored data yields the empty default state (with
    /// the given default outfit) and a logged warning; opening never fails.
    pub async fn open(
        persona_id: impl Into<String>,
        default_outfit: &str,
        repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        let persona_id = persona_id.into();
        let state = match repository.load(&persona_id).await {
            Ok(Some(snapshot)) => {
                let mut state = SessionState::from_snapshot(snapshot);
                if state.current_outfit.is_empty() {
                    state.current_outfit = default_outfit.to_string();
                }
                state
            }
            Ok(None) => SessionState::with_outfit(default_outfit),
            Err(err) => {
                tracing::warn!(persona = %persona_id, error = %err, "discarding stored profile");
                SessionState::with_outfit(default_outfit)
            }
        };

        Self {
            persona_id,
            state: RwLock::new(state),
            repository,
        }
    }

    /// Returns the persona this store belongs to.
    pub fn persona_id(&self) -> &str {
        &self.persona_id
    }

    /// Records a new memory, assigning id and timestamp.
    ///
    /// The draft's `importance` is accepted as-is; the store does not enforce
    /// the 1-10 range.
    pub async fn add_memory(&self, draft: MemoryDraft) {
        self.apply(Action::AddMemory {
            entry: MemoryEntry::new(draft),
        })
        .await;
    }

    /// Replaces the active outfit. Unknown ids are accepted; they simply
    /// render no matching cosmetic elsewhere.
    pub async fn set_outfit(&self, outfit: impl Into<String>) {
        self.apply(Action::SetOutfit {
            outfit: outfit.into(),
        })
        .await;
    }

    /// Replaces the display name.
    pub async fn set_user_name(&self, name: impl Into<String>) {
        self.apply(Action::SetUserName { name: name.into() }).await;
    }

    /// Appends a conversation turn with the current timestamp.
    ///
    /// Either side may be empty; record the user's text with an empty
    /// response, then fill it in via [`Self::complete_last_turn`].
    pub async fn add_conversation_turn(
        &self,
        user: impl Into<String>,
        response: impl Into<String>,
        context: impl Into<String>,
    ) {
        self.apply(Action::RecordTurn {
            turn: ConversationTurn {
                user: user.into(),
                response: response.into(),
                timestamp: Utc::now(),
                context: context.into(),
            },
        })
        .await;
    }

    /// Overwrites the last turn's response once a reply has been generated.
    pub async fn complete_last_turn(&self, response: impl Into<String>) {
        self.apply(Action::CompleteLastTurn {
            response: response.into(),
        })
        .await;
    }

    /// Merges a partial preferences update at the field level.
    pub async fn update_preferences(&self, update: PreferencesUpdate) {
        self.apply(Action::UpdatePreferences { update }).await;
    }

    /// Empties the memory list; conversation history and preferences stay.
    pub async fn clear_memories(&self) {
        self.apply(Action::ClearMemories).await;
    }

    /// Sets the transient processing flag. Concurrent widgets race on this;
    /// last writer wins.
    pub async fn set_processing(&self, active: bool) {
        self.apply(Action::SetProcessing { active }).await;
    }

    /// Returns the transient processing flag.
    pub async fn is_processing(&self) -> bool {
        self.state.read().await.is_processing
    }

    /// Returns memories relevant to a query, capped at
    /// [`RELEVANT_MEMORY_LIMIT`].
    ///
    /// The query is lowercased and split on whitespace; a memory matches if
    /// any token is a substring of its content, a tag, or its recorded user
    /// input. Results keep storage order (newest-first) - no ranking.
    pub async fn relevant_memories(&self, query: &str) -> Vec<MemoryEntry> {
        let tokens: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        self.state
            .read()
            .await
            .memories
            .iter()
            .filter(|memory| memory.matches(&tokens))
            .take(RELEVANT_MEMORY_LIMIT)
            .cloned()
            .collect()
    }

    /// Returns the active outfit id.
    pub async fn current_outfit(&self) -> String {
        self.state.read().await.current_outfit.clone()
    }

    /// Returns the display name (empty when unset).
    pub async fn user_name(&self) -> String {
        self.state.read().await.user_name.clone()
    }

    /// Returns a clone of the full current state, for display.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Runs an action through the reducer and persists when required.
    ///
    /// The snapshot is taken under the write lock so that a persisted state
    /// is observable before the next read, but the save itself happens after
    /// the lock is released.
    async fn apply(&self, action: Action) {
        let persists = action.persists();
        let snapshot = {
            let mut guard = self.state.write().await;
            let current = std::mem::take(&mut *guard);
            *guard = reduce(current, action);
            persists.then(|| guard.snapshot())
        };

        if let Some(snapshot) = snapshot {
            if let Err(err) = self.repository.save(&self.persona_id, &snapshot).await {
                tracing::warn!(
                    persona = %self.persona_id,
                    error = %err,
                    "failed to persist profile snapshot"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HearthError, Result};
    use crate::memory::MemoryKind;
    use crate::session::model::ProfileSnapshot;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository double that counts saves.
    struct MockRepository {
        snapshots: Mutex<HashMap<String, ProfileSnapshot>>,
        save_count: Mutex<usize>,
        fail_load: bool,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                snapshots: Mutex::new(HashMap::new()),
                save_count: Mutex::new(0),
                fail_load: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_load: true,
                ..Self::new()
            }
        }

        fn saves(&self) -> usize {
            *self.save_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl ProfileRepository for MockRepository {
        async fn load(&self, persona_id: &str) -> Result<Option<ProfileSnapshot>> {
            if self.fail_load {
                return Err(HearthError::Serialization {
                    format: "JSON".to_string(),
                    message: "expected value at line 1".to_string(),
                });
            }
            Ok(self.snapshots.lock().unwrap().get(persona_id).cloned())
        }

        async fn save(&self, persona_id: &str, snapshot: &ProfileSnapshot) -> Result<()> {
            *self.save_count.lock().unwrap() += 1;
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

    fn draft(content: &str, tags: &[&str]) -> MemoryDraft {
        MemoryDraft {
            kind: MemoryKind::Conversation,
            content: content.to_string(),
            user_input: None,
            response_text: None,
            emotion: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            importance: 7,
            context: "general".to_string(),
        }
    }

    #[tokio::test]
    async fn open_with_empty_storage_uses_defaults() {
        let repository = Arc::new(MockRepository::new());
        let store = SessionStore::open("mae", "kitchen-apron", repository).await;

        let state = store.state().await;
        assert!(state.memories.is_empty());
        assert!(state.conversation_history.is_empty());
        assert_eq!(state.current_outfit, "kitchen-apron");
        assert_eq!(state.user_name, "");
    }

    #[tokio::test]
    async fn open_with_malformed_storage_falls_back_to_defaults() {
        let repository = Arc::new(MockRepository::failing());
        let store = SessionStore::open("mae", "kitchen-apron", repository).await;

        let state = store.state().await;
        assert!(state.memories.is_empty());
        assert_eq!(state.current_outfit, "kitchen-apron");
    }

    #[tokio::test]
    async fn mutations_persist_a_snapshot() {
        let repository = Arc::new(MockRepository::new());
        let store = SessionStore::open("mae", "kitchen-apron", repository.clone()).await;

        store.set_user_name("Renee").await;
        store.add_memory(draft("loves golden milk", &["turmeric"])).await;
        store.set_outfit("detroit-motown").await;

        assert_eq!(repository.saves(), 3);
        let stored = repository
            .snapshots
            .lock()
            .unwrap()
            .get("mae")
            .cloned()
            .unwrap();
        assert_eq!(stored.user_name, "Renee");
        assert_eq!(stored.current_outfit, "detroit-motown");
        assert_eq!(stored.memories.len(), 1);
    }

    #[tokio::test]
    async fn transient_mutations_do_not_persist() {
        let repository = Arc::new(MockRepository::new());
        let store = SessionStore::open("mae", "kitchen-apron", repository.clone()).await;

        store.add_conversation_turn("hello", "", "general").await;
        store.complete_last_turn("hi there, sweetheart").await;
        store.set_processing(true).await;

        assert_eq!(repository.saves(), 0);
        assert!(store.is_processing().await);
        let state = store.state().await;
        assert_eq!(state.conversation_history[0].response, "hi there, sweetheart");
    }

    #[tokio::test]
    async fn reload_round_trips_the_persisted_subset() {
        let repository = Arc::new(MockRepository::new());
        {
            let store = SessionStore::open("mae", "kitchen-apron", repository.clone()).await;
            store.set_user_name("Renee").await;
            store.add_memory(draft("asked about greens", &["collard"])).await;
            store.add_conversation_turn("hi", "hello", "cooking").await;
        }

        let reopened = SessionStore::open("mae", "kitchen-apron", repository).await;
        let state = reopened.state().await;
        assert_eq!(state.user_name, "Renee");
        assert_eq!(state.memories.len(), 1);
        // Conversation history is deliberately not persisted.
        assert!(state.conversation_history.is_empty());
    }

    #[tokio::test]
    async fn relevant_memories_caps_and_matches_tokens() {
        let repository = Arc::new(MockRepository::new());
        let store = SessionStore::open("mae", "kitchen-apron", repository).await;

        for i in 0..8 {
            store
                .add_memory(draft(&format!("turmeric note {i}"), &[]))
                .await;
        }
        store.add_memory(draft("unrelated entry", &[])).await;

        let hits = store.relevant_memories("any Turmeric tips").await;
        assert_eq!(hits.len(), RELEVANT_MEMORY_LIMIT);
        assert!(hits.iter().all(|m| m.content.contains("turmeric")));
        // Storage order: newest-first, so the latest matching note leads.
        assert_eq!(hits[0].content, "turmeric note 7");
    }

    #[tokio::test]
    async fn relevant_memories_empty_query_matches_nothing() {
        let repository = Arc::new(MockRepository::new());
        let store = SessionStore::open("mae", "kitchen-apron", repository).await;
        store.add_memory(draft("something", &[])).await;

        assert!(store.relevant_memories("   ").await.is_empty());
    }
}
