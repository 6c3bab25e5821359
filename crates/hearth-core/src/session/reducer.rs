//! Pure session state reducer.

use super::action::Action;
use super::model::{CONVERSATION_CAP, MEMORY_CAP, SessionState};

/// Applies one action to the state, returning the next state.
///
/// This is a pure function: all ids and timestamps are carried by the action.
/// Trim directions are intentional and asymmetric - memories keep the head
/// (newest-first), conversation history keeps the tail (oldest dropped).
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::AddMemory { entry } => {
            state.memories.insert(0, entry);
            state.memories.truncate(MEMORY_CAP);
        }
        Action::SetOutfit { outfit } => {
            state.current_outfit = outfit;
        }
        Action::SetUserName { name } => {
            state.user_name = name;
        }
        Action::RecordTurn { turn } => {
            state.conversation_history.push(turn);
            let len = state.conversation_history.len();
            if len > CONVERSATION_CAP {
                state.conversation_history.drain(..len - CONVERSATION_CAP);
            }
        }
        Action::CompleteLastTurn { response } => {
            // No-op on an empty history; callers correlate the in-flight turn.
            if let Some(last) = state.conversation_history.last_mut() {
                last.response = response;
            }
        }
        Action::UpdatePreferences { update } => {
            if let Some(topics) = update.favorite_topics {
                state.user_preferences.favorite_topics = topics;
            }
            if let Some(interests) = update.interests {
                state.user_preferences.interests = interests;
            }
            if let Some(style) = update.learning_style {
                state.user_preferences.learning_style = style;
            }
        }
        Action::SetProcessing { active } => {
            state.is_processing = active;
        }
        Action::ClearMemories => {
            state.memories.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDraft, MemoryEntry, MemoryKind};
    use crate::session::model::{ConversationTurn, PreferencesUpdate};
    use chrono::Utc;

    fn memory(content: &str) -> MemoryEntry {
        MemoryEntry::new(MemoryDraft {
            kind: MemoryKind::Conversation,
            content: content.to_string(),
            user_input: None,
            response_text: None,
            emotion: None,
            tags: Vec::new(),
            importance: 5,
            context: "general".to_string(),
        })
    }

    fn turn(user: &str) -> ConversationTurn {
        ConversationTurn {
            user: user.to_string(),
            response: String::new(),
            timestamp: Utc::now(),
            context: "general".to_string(),
        }
    }

    #[test]
    fn add_memory_prepends() {
        let mut state = SessionState::default();
        state = reduce(state, Action::AddMemory { entry: memory("first") });
        state = reduce(state, Action::AddMemory { entry: memory("second") });

        assert_eq!(state.memories[0].content, "second");
        assert_eq!(state.memories[1].content, "first");
    }

    #[test]
    fn memories_cap_drops_oldest() {
        let mut state = SessionState::default();
        for i in 0..101 {
            state = reduce(
                state,
                Action::AddMemory {
                    entry: memory(&format!("entry {i}")),
                },
            );
        }

        assert_eq!(state.memories.len(), MEMORY_CAP);
        // Newest first; the very first insert fell off the tail.
        assert_eq!(state.memories[0].content, "entry 100");
        assert!(state.memories.iter().all(|m| m.content != "entry 0"));
    }

    #[test]
    fn conversation_cap_drops_from_front() {
        let mut state = SessionState::default();
        for i in 0..55 {
            state = reduce(
                state,
                Action::RecordTurn {
                    turn: turn(&format!("message {i}")),
                },
            );
        }

        assert_eq!(state.conversation_history.len(), CONVERSATION_CAP);
        // Oldest five dropped, tail kept in order.
        assert_eq!(state.conversation_history[0].user, "message 5");
        assert_eq!(state.conversation_history[49].user, "message 54");
    }

    #[test]
    fn complete_last_turn_fills_pending_response() {
        let mut state = SessionState::default();
        state = reduce(state, Action::RecordTurn { turn: turn("earlier") });
        state = reduce(state, Action::RecordTurn { turn: turn("latest") });
        state = reduce(
            state,
            Action::CompleteLastTurn {
                response: "here you go".to_string(),
            },
        );

        assert_eq!(state.conversation_history[1].response, "here you go");
        assert_eq!(state.conversation_history[0].response, "");
    }

    #[test]
    fn complete_last_turn_on_empty_history_is_noop() {
        let state = reduce(
            SessionState::default(),
            Action::CompleteLastTurn {
                response: "orphan".to_string(),
            },
        );
        assert!(state.conversation_history.is_empty());
    }

    #[test]
    fn preferences_merge_replaces_arrays_wholesale() {
        let mut state = SessionState::default();
        state = reduce(
            state,
            Action::UpdatePreferences {
                update: PreferencesUpdate {
                    favorite_topics: Some(vec!["soups".to_string(), "teas".to_string()]),
                    interests: None,
                    learning_style: None,
                },
            },
        );
        state = reduce(
            state,
            Action::UpdatePreferences {
                update: PreferencesUpdate {
                    favorite_topics: Some(vec!["stews".to_string()]),
                    interests: Some(vec!["history".to_string()]),
                    learning_style: None,
                },
            },
        );

        // Replaced, not concatenated.
        assert_eq!(state.user_preferences.favorite_topics, vec!["stews"]);
        assert_eq!(state.user_preferences.interests, vec!["history"]);
        assert_eq!(state.user_preferences.learning_style, "visual");
    }

    #[test]
    fn clear_memories_leaves_history_and_preferences() {
        let mut state = SessionState::default();
        state = reduce(state, Action::AddMemory { entry: memory("kept?") });
        state = reduce(state, Action::RecordTurn { turn: turn("hello") });
        state = reduce(
            state,
            Action::UpdatePreferences {
                update: PreferencesUpdate {
                    interests: Some(vec!["music".to_string()]),
                    ..PreferencesUpdate::default()
                },
            },
        );
        state = reduce(state, Action::ClearMemories);

        assert!(state.memories.is_empty());
        assert_eq!(state.conversation_history.len(), 1);
        assert_eq!(state.user_preferences.interests, vec!["music"]);
    }

    #[test]
    fn set_outfit_accepts_unknown_ids() {
        let state = reduce(
            SessionState::default(),
            Action::SetOutfit {
                outfit: "no-such-preset".to_string(),
            },
        );
        assert_eq!(state.current_outfit, "no-such-preset");
    }
}
