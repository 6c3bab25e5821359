//! Memory entry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Categories of memory entries.
///
/// The tag set is a closed enumeration; individual screens may only surface a
/// subset of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MemoryKind {
    /// A recorded conversation exchange.
    Conversation,
    /// A learned user preference.
    Preference,
    /// A health-related update shared by the user.
    HealthUpdate,
    /// A recipe shared during a session.
    RecipeShared,
    /// An emotional moment worth remembering.
    Emotion,
}

/// Emotional tone attached to a memory or derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    Happy,
    Concerned,
    Excited,
    Calm,
    Wise,
}

/// A single remembered interaction.
///
/// Entries are created through [`MemoryEntry::new`], which assigns the unique
/// id and creation timestamp; everything else is caller-supplied via
/// [`MemoryDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Unique identifier (UUID format), assigned at creation
    pub id: String,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
    /// Category of this memory
    pub kind: MemoryKind,
    /// Free-text summary
    pub content: String,
    /// Verbatim user input, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    /// Verbatim reply text, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    /// Emotional tone, if tagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    /// Ordered lowercase keywords (insertion order = extraction order)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Caller-supplied salience on a 1-10 scale.
    ///
    /// Accepted as-is: out-of-range values are not rejected or clamped, and
    /// no trimming or matching logic reads this field. Display/sorting only.
    pub importance: i32,
    /// Screen/topic label this memory belongs to
    pub context: String,
}

/// Caller-supplied fields of a memory entry, without id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDraft {
    pub kind: MemoryKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub importance: i32,
    pub context: String,
}

impl MemoryEntry {
    /// Creates a new entry from a draft, assigning id and timestamp.
    pub fn new(draft: MemoryDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind: draft.kind,
            content: draft.content,
            user_input: draft.user_input,
            response_text: draft.response_text,
            emotion: draft.emotion,
            tags: draft.tags,
            importance: draft.importance,
            context: draft.context,
        }
    }

    /// Returns true if any token is a case-insensitive substring of this
    /// entry's content, tags, or recorded user input.
    pub fn matches(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|token| {
            self.content.to_lowercase().contains(token)
                || self.tags.iter().any(|tag| tag.to_lowercase().contains(token))
                || self
                    .user_input
                    .as_deref()
                    .is_some_and(|input| input.to_lowercase().contains(token))
        })
    }
}
