//! Scripted interaction layer.
//!
//! Reply templates, the scripted responder, emotion classification, and the
//! chat exchange driver that ties a widget to a session store.

pub mod chat;
pub mod emotion;
pub mod presets;
pub mod responder;
pub mod templates;

pub use chat::ChatSession;
pub use emotion::classify_emotion;
pub use responder::{MEMORY_SUFFIX, ScriptedResponder, ThinkingDelay, compose_reply};
pub use templates::{GENERAL_CONTEXT, TemplateSet, TemplateTable};
