//! Outfit catalog models and the outfit-family tone mapping.

use serde::{Deserialize, Serialize};

/// Rarity tier shown on outfit badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitRarity {
    Common,
    Rare,
    Legendary,
}

/// A single selectable cosmetic preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItem {
    /// Unique identifier within the persona's catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown in the customizer
    pub description: String,
    /// Search/filter tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Rarity badge (None = no badge)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<OutfitRarity>,
}

/// A named group of outfit items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<OutfitItem>,
}

/// The closed set of outfit families that carry a response tone.
///
/// An outfit id belongs to a family when it equals the family name or starts
/// with `<family>-`; every other id belongs to no family and contributes no
/// tone clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitFamily {
    Professional,
    Creative,
    Casual,
}

impl OutfitFamily {
    /// Classifies an outfit id into its family, if any.
    pub fn classify(outfit_id: &str) -> Option<Self> {
        for family in [Self::Professional, Self::Creative, Self::Casual] {
            let name = family.name();
            if outfit_id == name || outfit_id.starts_with(&format!("{name}-")) {
                return Some(family);
            }
        }
        None
    }

    fn name(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Casual => "casual",
        }
    }

    /// The fixed clause appended to replies while an outfit of this family
    /// is worn.
    pub fn tone_clause(self) -> &'static str {
        match self {
            Self::Professional => {
                " As a professional, I believe in continuous learning and growth."
            }
            Self::Creative => " Creativity is the key to innovation and problem-solving.",
            Self::Casual => {
                " Sometimes the best solutions come from relaxed, open conversations."
            }
        }
    }
}
