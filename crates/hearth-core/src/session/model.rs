//! Session domain model.
//!
//! This module contains the root state aggregate for one persona on one
//! device, plus the snapshot type written to on-device storage.

use crate::memory::MemoryEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained memory entries (newest-first, keep-head).
pub const MEMORY_CAP: usize = 100;

/// Maximum number of retained conversation turns (oldest-first, keep-tail).
pub const CONVERSATION_CAP: usize = 50;

/// Current on-disk snapshot schema version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// A single exchange in the conversation history.
///
/// Either side may be empty: a turn is recorded with an empty `response`
/// while a reply is pending, and filled in once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// User input text (may be empty if the turn only carries a reply)
    pub user: String,
    /// Reply text (may be empty while a reply is pending)
    pub response: String,
    /// Timestamp when the turn was recorded
    pub timestamp: DateTime<Utc>,
    /// Screen/topic label this turn belongs to
    pub context: String,
}

/// User preference record.
///
/// Array-valued fields are replaced wholesale on update, not concatenated;
/// "merge" happens at the field level via [`PreferencesUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_topics: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_learning_style")]
    pub learning_style: String,
}

fn default_learning_style() -> String {
    "visual".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorite_topics: Vec::new(),
            interests: Vec::new(),
            learning_style: default_learning_style(),
        }
    }
}

/// A partial preferences update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
}

/// The root state aggregate for one persona on one device.
///
/// `is_processing` is transient UI state and is never persisted. The
/// conversation history is likewise in-memory only; see [`ProfileSnapshot`]
/// for exactly what survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Retained memories, newest first
    pub memories: Vec<MemoryEntry>,
    /// Conversation turns, oldest first, truncated from the front
    pub conversation_history: Vec<ConversationTurn>,
    /// Active cosmetic preset identifier
    pub current_outfit: String,
    /// Optional display name; empty means "use the persona's endearment"
    pub user_name: String,
    /// Learned user preferences
    pub user_preferences: UserPreferences,
    /// True while a reply is being generated; last writer wins
    #[serde(skip)]
    pub is_processing: bool,
}

impl SessionState {
    /// Creates an empty state with the given default outfit.
    pub fn with_outfit(default_outfit: impl Into<String>) -> Self {
        Self {
            current_outfit: default_outfit.into(),
            ..Self::default()
        }
    }

    /// Produces the persisted subset of this state.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            memories: self.memories.clone(),
            user_preferences: self.user_preferences.clone(),
            current_outfit: self.current_outfit.clone(),
            user_name: self.user_name.clone(),
        }
    }

    /// Rebuilds state from a persisted snapshot.
    ///
    /// Conversation history and the processing flag always start empty; they
    /// do not survive a reload.
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Self {
        Self {
            memories: snapshot.memories,
            conversation_history: Vec::new(),
            current_outfit: snapshot.current_outfit,
            user_name: snapshot.user_name,
            user_preferences: snapshot.user_preferences,
            is_processing: false,
        }
    }
}

/// The on-device persisted form of a session: one JSON value per persona.
///
/// Holds exactly {memories, preferences, outfit, name}; conversation history
/// is intentionally excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Snapshot schema version, for future migrations
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub memories: Vec<MemoryEntry>,
    #[serde(default)]
    pub user_preferences: UserPreferences,
    #[serde(default)]
    pub current_outfit: String,
    #[serde(default)]
    pub user_name: String,
}

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}
