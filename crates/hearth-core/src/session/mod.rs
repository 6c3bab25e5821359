//! Session domain module.
//!
//! This module contains the session state aggregate, the pure reducer that
//! mutates it, the store that owns it, and the repository interface for
//! persistence.
//!
//! # Module Structure
//!
//! - `model`: State aggregate and persisted snapshot types
//! - `action`: Mutation actions applied by the reducer
//! - `reducer`: Pure `(state, action) -> state` function
//! - `store`: `SessionStore`, the injected single source of truth
//! - `repository`: Repository trait for profile persistence
//! - `memory_repository`: In-process repository (fallback + test double)

mod action;
mod memory_repository;
mod model;
mod reducer;
mod repository;
mod store;

// Re-export public API
pub use action::Action;
pub use model::{
    CONVERSATION_CAP, ConversationTurn, MEMORY_CAP, PreferencesUpdate, ProfileSnapshot,
    SNAPSHOT_SCHEMA_VERSION, SessionState, UserPreferences,
};
pub use memory_repository::InMemoryProfileRepository;
pub use reducer::reduce;
pub use repository::ProfileRepository;
pub use store::{RELEVANT_MEMORY_LIMIT, SessionStore};
