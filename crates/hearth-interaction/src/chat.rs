//! Chat exchange driver.
//!
//! Wires the documented control flow for one screen: record the user's turn,
//! generate the reply, complete the pending turn, and derive a memory entry
//! from the exchange.

use crate::emotion::classify_emotion;
use crate::responder::ScriptedResponder;
use hearth_core::memory::{MemoryDraft, MemoryKind};
use hearth_core::session::SessionStore;
use std::sync::Arc;

/// How many leading characters of the input end up in the memory summary.
const MEMORY_SUMMARY_PREFIX: usize = 50;

/// How many input tokens become memory tags.
const MEMORY_TAG_COUNT: usize = 5;

/// Drives a conversation between one user-facing widget and a responder.
///
/// Each screen constructs its own `ChatSession` with its context label;
/// widgets sharing a persona share the underlying store.
pub struct ChatSession {
    responder: ScriptedResponder,
    context: String,
}

impl ChatSession {
    pub fn new(responder: ScriptedResponder, context: impl Into<String>) -> Self {
        Self {
            responder,
            context: context.into(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn responder(&self) -> &ScriptedResponder {
        &self.responder
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        self.responder.store()
    }

    /// Handles one user message end to end and returns the reply.
    ///
    /// The turn is recorded before generation with an empty response, then
    /// completed once the reply exists; a conversation memory is derived from
    /// the exchange. Failures surface as the persona's apology line, so this
    /// always returns something presentable.
    pub async fn send(&self, user_input: &str) -> String {
        let store = self.responder.store();

        store
            .add_conversation_turn(user_input, "", self.context.clone())
            .await;

        let reply = self
            .responder
            .generate_or_apologize(user_input, &self.context)
            .await;

        store.complete_last_turn(reply.clone()).await;
        store.add_memory(self.derive_memory(user_input, &reply)).await;

        reply
    }

    fn derive_memory(&self, user_input: &str, reply: &str) -> MemoryDraft {
        let summary_prefix: String = user_input.chars().take(MEMORY_SUMMARY_PREFIX).collect();
        let tags: Vec<String> = user_input
            .to_lowercase()
            .split_whitespace()
            .take(MEMORY_TAG_COUNT)
            .map(str::to_string)
            .collect();

        MemoryDraft {
            kind: MemoryKind::Conversation,
            content: format!("User asked about: {summary_prefix}..."),
            user_input: Some(user_input.to_string()),
            response_text: Some(reply.to_string()),
            emotion: Some(classify_emotion(user_input)),
            tags,
            importance: 7,
            context: self.context.clone(),
        }
    }
}
