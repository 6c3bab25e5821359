//! Persona domain model.
//!
//! Represents the characters that host conversations with users. Each
//! persona has its own voice, its own profile storage key, and its own
//! cosmetic catalog.

use crate::avatar::{AvatarPalette, OutfitCategory};
use serde::{Deserialize, Serialize};

/// Represents the source of a persona (system-provided or user-created).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum PersonaSource {
    /// System-provided default personas
    System,
    /// User-created custom personas
    User,
}

impl Default for PersonaSource {
    fn default() -> Self {
        PersonaSource::User
    }
}

/// A character hosting one or more screens of the application.
///
/// The persona id doubles as the profile storage key, so each persona keeps
/// its own memories, preferences, and outfit between visits.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Persona {
    /// Unique identifier; also the profile storage key
    pub id: String,
    /// Display name
    pub name: String,
    /// Role or title describing the persona
    pub role: String,
    /// Background description of the persona's voice and expertise
    pub background: String,
    /// How the persona addresses a user who has not shared a name
    pub endearment: String,
    /// Fixed in-character line surfaced when reply generation fails
    pub apology: String,
    /// Outfit worn before the user customizes anything
    pub default_outfit: String,
    /// Fixed color constants for avatar previews
    pub palette: AvatarPalette,
    /// Cosmetic catalog shown in the customizer
    #[serde(default)]
    pub outfit_categories: Vec<OutfitCategory>,
    /// Source of the persona (System or User)
    #[serde(default)]
    pub source: PersonaSource,
}

impl Persona {
    /// The name used when composing replies: the user's chosen name, or this
    /// persona's endearment when none is set.
    pub fn display_name<'a>(&'a self, user_name: &'a str) -> &'a str {
        if user_name.is_empty() {
            &self.endearment
        } else {
            user_name
        }
    }

    /// Avatar preview URL for this persona's current outfit.
    pub fn avatar_url(&self, outfit_id: &str) -> String {
        self.palette.preview_url(&format!("{}-{}", self.id, outfit_id))
    }
}
