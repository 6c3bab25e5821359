//! Profile repository trait.
//!
//! Defines the interface for per-persona profile persistence.

use super::model::ProfileSnapshot;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for persisting per-persona profile snapshots.
///
/// This trait decouples the session store from the storage mechanism (JSON
/// files, in-memory test doubles, a browser key-value bridge, ...). One key
/// is kept per persona; the value is the full snapshot.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the snapshot for a persona.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: a snapshot exists and parsed cleanly
    /// - `Ok(None)`: nothing stored for this persona yet
    /// - `Err(_)`: storage failed or held malformed data; callers recover
    ///   with defaults rather than surfacing this
    async fn load(&self, persona_id: &str) -> Result<Option<ProfileSnapshot>>;

    /// Saves the snapshot for a persona, replacing any previous value.
    async fn save(&self, persona_id: &str, snapshot: &ProfileSnapshot) -> Result<()>;

    /// Deletes the stored snapshot for a persona (succeeds if absent).
    async fn delete(&self, persona_id: &str) -> Result<()>;
}
