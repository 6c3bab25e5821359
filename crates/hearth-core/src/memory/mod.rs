//! Memory domain module.
//!
//! A memory entry is a summarized record of a past interaction, kept within
//! storage bounds and used to bias future responses.

mod model;

pub use model::{Emotion, MemoryDraft, MemoryEntry, MemoryKind};
