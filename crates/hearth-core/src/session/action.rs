//! Session mutation actions.

use super::model::{ConversationTurn, PreferencesUpdate};
use crate::memory::MemoryEntry;
use serde::{Deserialize, Serialize};

/// A single mutation applied to a [`super::SessionState`] by the reducer.
///
/// Impure inputs (entry ids, timestamps) are assigned by the store before an
/// action is constructed, so applying an action is a pure transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Prepend a memory entry, trimming to the retention cap.
    AddMemory { entry: MemoryEntry },
    /// Replace the active outfit unconditionally. Unknown ids are accepted;
    /// the store does not own the cosmetic catalog.
    SetOutfit { outfit: String },
    /// Replace the display name, no trimming or validation.
    SetUserName { name: String },
    /// Append a conversation turn, trimming oldest-first to the cap.
    RecordTurn { turn: ConversationTurn },
    /// Overwrite the last recorded turn's response text.
    CompleteLastTurn { response: String },
    /// Merge a partial preferences update at the field level.
    UpdatePreferences { update: PreferencesUpdate },
    /// Toggle the transient processing flag.
    SetProcessing { active: bool },
    /// Empty the memory list; history and preferences are untouched.
    ClearMemories,
}

impl Action {
    /// Returns true if applying this action must be followed by a persisted
    /// snapshot (i.e. it touches {memories, preferences, outfit, name}).
    pub fn persists(&self) -> bool {
        match self {
            Action::AddMemory { .. }
            | Action::SetOutfit { .. }
            | Action::SetUserName { .. }
            | Action::UpdatePreferences { .. }
            | Action::ClearMemories => true,
            // Turns live in memory only; the processing flag is transient.
            Action::RecordTurn { .. }
            | Action::CompleteLastTurn { .. }
            | Action::SetProcessing { .. } => false,
        }
    }
}
