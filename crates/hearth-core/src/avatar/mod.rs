//! Avatar cosmetics module.
//!
//! Outfit catalog types, the outfit-family tone mapping, and the avatar
//! preview URL builder. All of this is pure data and string formatting; the
//! session store deliberately does not know about it.

mod model;
mod url;

pub use model::{OutfitCategory, OutfitFamily, OutfitItem, OutfitRarity};
pub use url::AvatarPalette;
