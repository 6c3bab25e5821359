//! Avatar preview URL construction.

use serde::{Deserialize, Serialize};

/// Base endpoint of the external avatar image service.
const AVATAR_ENDPOINT: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Fixed per-persona color constants for the avatar image service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarPalette {
    pub background_color: String,
    pub skin_color: String,
    pub hair_color: String,
    pub clothing_color: String,
    pub accessories_color: String,
}

impl AvatarPalette {
    pub fn new(
        background_color: &str,
        skin_color: &str,
        hair_color: &str,
        clothing_color: &str,
        accessories_color: &str,
    ) -> Self {
        Self {
            background_color: background_color.to_string(),
            skin_color: skin_color.to_string(),
            hair_color: hair_color.to_string(),
            clothing_color: clothing_color.to_string(),
            accessories_color: accessories_color.to_string(),
        }
    }

    /// Formats the preview URL for a seed (usually `<persona>-<outfit>`).
    ///
    /// Pure string formatting; no request is made here.
    pub fn preview_url(&self, seed: &str) -> String {
        format!(
            "{AVATAR_ENDPOINT}?seed={seed}&backgroundColor={}&skinColor={}&hairColor={}&clothingColor={}&accessoriesColor={}",
            self.background_color,
            self.skin_color,
            self.hair_color,
            self.clothing_color,
            self.accessories_color,
        )
    }
}
