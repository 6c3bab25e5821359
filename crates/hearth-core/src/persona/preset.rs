//! System persona presets.

use super::model::{Persona, PersonaSource};
use crate::avatar::{AvatarPalette, OutfitCategory, OutfitItem, OutfitRarity};

/// Returns the system-defined default personas.
///
/// These are the three hosts of the application's screens:
/// - Auntie Mae, the healing chef (cooking and health guidance)
/// - Dr. Feelgood, the medical guide (condition education)
/// - Isabella Chen, the fashion designer (show commentary)
pub fn get_default_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "auntie-mae".to_string(),
            name: "Auntie Mae".to_string(),
            role: "Healing Chef & Health Advocate".to_string(),
            background: "A wise Indian-American elder who blends her grandmother's \
                         healing traditions with Detroit soul food wisdom, supporting \
                         women through their health journeys with food and community."
                .to_string(),
            endearment: "sweetheart".to_string(),
            apology: "Oh sweetheart, I'm having trouble hearing you right now. Can you \
                      try asking me again? I'm here for you."
                .to_string(),
            default_outfit: "traditional-indian".to_string(),
            palette: AvatarPalette::new("f4e4c1", "brown", "gray", "red", "gold"),
            outfit_categories: vec![
                OutfitCategory {
                    id: "heritage".to_string(),
                    name: "Heritage Wear".to_string(),
                    description: Some(
                        "Traditional pieces for sharing healing recipes and cultural wisdom"
                            .to_string(),
                    ),
                    items: vec![
                        OutfitItem {
                            id: "traditional-indian".to_string(),
                            name: "Traditional Indian".to_string(),
                            description: "Saree and traditional jewelry".to_string(),
                            tags: vec!["traditional".to_string(), "heritage".to_string()],
                            rarity: Some(OutfitRarity::Legendary),
                        },
                        OutfitItem {
                            id: "detroit-motown".to_string(),
                            name: "Detroit Motown".to_string(),
                            description: "Sparkling sequin dress".to_string(),
                            tags: vec!["show".to_string(), "soul".to_string()],
                            rarity: Some(OutfitRarity::Rare),
                        },
                    ],
                },
                OutfitCategory {
                    id: "kitchen".to_string(),
                    name: "Kitchen".to_string(),
                    description: Some(
                        "Everyday wear for cooking demonstrations".to_string(),
                    ),
                    items: vec![
                        OutfitItem {
                            id: "kitchen-apron".to_string(),
                            name: "Kitchen Apron".to_string(),
                            description: "Heritage kitchen apron".to_string(),
                            tags: vec!["cooking".to_string()],
                            rarity: Some(OutfitRarity::Common),
                        },
                        OutfitItem {
                            id: "casual-outfit".to_string(),
                            name: "Casual Outfit".to_string(),
                            description: "Comfortable everyday outfit".to_string(),
                            tags: vec!["casual".to_string()],
                            rarity: Some(OutfitRarity::Common),
                        },
                    ],
                },
            ],
            source: PersonaSource::System,
        },
        Persona {
            id: "dr-feelgood".to_string(),
            name: "Dr. Feelgood".to_string(),
            role: "Medical Guide".to_string(),
            background: "A warm community physician who walks users through condition \
                         education in plain language, always pointing back to their own \
                         care team for decisions."
                .to_string(),
            endearment: "friend".to_string(),
            apology: "I'm sorry, I didn't quite catch that. Give me a moment and ask \
                      again - I'm right here."
                .to_string(),
            default_outfit: "professional-white-coat".to_string(),
            palette: AvatarPalette::new("87ceeb", "brown", "black", "white", "red"),
            outfit_categories: vec![OutfitCategory {
                id: "clinic".to_string(),
                name: "Clinic Wear".to_string(),
                description: None,
                items: vec![
                    OutfitItem {
                        id: "professional-white-coat".to_string(),
                        name: "White Coat".to_string(),
                        description: "Classic physician's coat".to_string(),
                        tags: vec!["professional".to_string()],
                        rarity: Some(OutfitRarity::Common),
                    },
                    OutfitItem {
                        id: "casual-clinic-polo".to_string(),
                        name: "Clinic Polo".to_string(),
                        description: "Relaxed clinic-day polo".to_string(),
                        tags: vec!["casual".to_string()],
                        rarity: Some(OutfitRarity::Common),
                    },
                ],
            }],
            source: PersonaSource::System,
        },
        Persona {
            id: "isabella-chen".to_string(),
            name: "Isabella Chen".to_string(),
            role: "Sustainable Fashion Designer".to_string(),
            background: "A creative visionary with a passion for sustainable luxury \
                         fashion - warm, inspiring, and deeply knowledgeable about \
                         ethical design."
                .to_string(),
            endearment: "darling".to_string(),
            apology: "Oh darling, the studio is a little loud right now - would you ask \
                      me that once more?"
                .to_string(),
            default_outfit: "designer-suit".to_string(),
            palette: AvatarPalette::new("ffdfba", "brown", "black", "purple", "gold"),
            outfit_categories: vec![
                OutfitCategory {
                    id: "designer".to_string(),
                    name: "Designer Attire".to_string(),
                    description: None,
                    items: vec![
                        OutfitItem {
                            id: "designer-suit".to_string(),
                            name: "Creative Director Suit".to_string(),
                            description: "Sophisticated designer suit in sustainable materials"
                                .to_string(),
                            tags: vec![
                                "professional".to_string(),
                                "creative".to_string(),
                                "luxury".to_string(),
                                "sustainable".to_string(),
                            ],
                            rarity: Some(OutfitRarity::Legendary),
                        },
                        OutfitItem {
                            id: "artistic-dress".to_string(),
                            name: "Artistic Director Dress".to_string(),
                            description: "Elegant dress reflecting creative vision".to_string(),
                            tags: vec![
                                "artistic".to_string(),
                                "elegant".to_string(),
                                "creative".to_string(),
                            ],
                            rarity: Some(OutfitRarity::Rare),
                        },
                    ],
                },
                OutfitCategory {
                    id: "casual".to_string(),
                    name: "Casual Creative".to_string(),
                    description: None,
                    items: vec![OutfitItem {
                        id: "casual-studio-outfit".to_string(),
                        name: "Studio Creative Outfit".to_string(),
                        description: "Comfortable yet stylish studio wear".to_string(),
                        tags: vec!["casual".to_string(), "creative".to_string()],
                        rarity: Some(OutfitRarity::Common),
                    }],
                },
            ],
            source: PersonaSource::System,
        },
    ]
}

/// Finds a system persona by id.
pub fn find_persona(persona_id: &str) -> Option<Persona> {
    get_default_personas().into_iter().find(|p| p.id == persona_id)
}
