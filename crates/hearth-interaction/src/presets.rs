//! Built-in template sets for the system personas.
//!
//! Keyword order within each table is deliberate - earlier entries win when
//! several keywords appear in the same input.

use crate::templates::{TemplateSet, TemplateTable};

/// Template set for the healing-chef persona (`auntie-mae`).
///
/// Contexts: `cooking`, `health`, plus the general fallback.
pub fn healing_chef_templates() -> TemplateSet {
    let general = TemplateTable::new(
        "Thank you for sharing that with me, {{ name }}. Your words tell me you're \
         really thinking deeply about this, and that's the first step toward understanding.",
    )
    .with_entry(
        "hello",
        "Well hello, {{ name }}! Come sit with me a while - what's on your heart today?",
    )
    .with_entry(
        "thank",
        "Oh honey, you never have to thank me. Caring for you is what I'm here for.",
    );

    let cooking = TemplateTable::new(
        "That's a wonderful question, dear one! Food is our first medicine, and \
         cooking with intention transforms simple ingredients into powerful medicine.",
    )
    .with_entry(
        "recipe",
        "Let me share something my grandmother taught me about that, {{ name }}. In \
         our kitchen, every spice tells a story of healing.",
    )
    .with_entry(
        "cook",
        "Oh honey, you're asking about one of my favorite things! When I came to \
         Detroit, I had to learn how to blend my grandmother's Indian wisdom with the \
         soul food traditions here. Let me tell you what works.",
    )
    .with_entry(
        "spice",
        "Every spice on my shelf earns its place, {{ name }}. The one you're curious \
         about has such beautiful healing properties when you cook it with patience.",
    )
    .with_entry(
        "greens",
        "Greens are a cornerstone of our table - garlic, onion, a splash of apple \
         cider vinegar, and time. Comfort and nourishment in one pot.",
    );

    let health = TemplateTable::new(
        "Sweetheart, I hear the concern in your question, and I want you to know \
         that what you're feeling is so valid. Healing happens in layers, just like \
         the spices in a good curry.",
    )
    .with_entry(
        "graves",
        "Living with Graves' disease asks so much of you, {{ name }}. You are not \
         alone in this journey, and there's real strength in asking.",
    )
    .with_entry(
        "thyroid",
        "Your thyroid shapes so much of how you feel day to day. Gentle food, real \
         rest, and your doctor's guidance all work together, dear one.",
    )
    .with_entry(
        "tired",
        "I hear the tiredness in your words, {{ name }}. Your body is asking you to \
         listen deeper - let's start with rest and something warm from the kitchen.",
    )
    .with_entry(
        "sick",
        "I'm sorry you're feeling unwell, dear one. Small comforts first: warm \
         broth, quiet, and someone to talk to. I'm right here.",
    );

    TemplateSet::new(general)
        .with_context("cooking", cooking)
        .with_context("health", health)
}

/// Template set for the medical-guide persona (`dr-feelgood`).
///
/// Contexts: `health`, plus the general fallback.
pub fn medical_guide_templates() -> TemplateSet {
    let general = TemplateTable::new(
        "I'm glad you asked, {{ name }}. Understanding your own health is the best \
         medicine I can offer - what would you like to walk through?",
    );

    let health = TemplateTable::new(
        "That's exactly the kind of question to bring to your care team, {{ name }} - \
         and in the meantime, let's make sure you understand what's going on.",
    )
    .with_entry(
        "symptom",
        "Symptoms are your body's way of reporting in. Keep a simple note of when \
         they happen and how strong they feel - patterns tell us more than any single day.",
    )
    .with_entry(
        "medication",
        "Medication questions always go to your prescriber first, {{ name }}. What I \
         can do is help you understand what each one is for, so the conversation is easier.",
    )
    .with_entry(
        "stress",
        "Stress feeds almost every condition I know. Small daily habits - a walk, a \
         slow meal, an early night - do more than any dramatic change.",
    )
    .with_entry(
        "heart",
        "A racing heart is worth taking seriously and worth understanding. Let's go \
         through what can drive it, and what your doctor will want to know.",
    );

    TemplateSet::new(general).with_context("health", health)
}

/// Template set for the fashion-designer persona (`isabella-chen`).
///
/// Contexts: `professional`, `creative`, plus the general fallback.
pub fn fashion_designer_templates() -> TemplateSet {
    let general = TemplateTable::new(
        "I'm here to inspire and guide you through the world of fashion. What would \
         you like to know about this collection?",
    )
    .with_entry(
        "fashion",
        "Fashion is about expressing your authentic self through beautiful design. \
         Each piece in this collection tells a story of sustainability and luxury.",
    )
    .with_entry(
        "sustain",
        "Sustainable luxury is the future of fashion - beauty with purpose. Every \
         material choice matters in creating a better world.",
    )
    .with_entry(
        "design",
        "Great design comes from understanding both aesthetics and function. It's \
         about creating pieces that are both beautiful and meaningful.",
    );

    let professional = TemplateTable::new(
        "As a professional designer, I believe in creating timeless pieces that \
         respect both people and planet.",
    )
    .with_entry(
        "material",
        "The materials in this collection are carefully chosen for their \
         sustainability and beauty. Organic silk, ethical wool, and recycled denim \
         all play a role.",
    )
    .with_entry(
        "craft",
        "Craftsmanship is at the heart of luxury. Each piece is created with \
         attention to detail and respect for traditional techniques.",
    );

    let creative = TemplateTable::new(
        "Creativity is the key to innovation and problem-solving in fashion design.",
    )
    .with_entry(
        "inspiration",
        "Inspiration comes from everywhere - nature, culture, and the stories we \
         want to tell. This collection was inspired by golden hour light.",
    )
    .with_entry(
        "innovation",
        "Innovation in fashion means pushing boundaries while staying true to our \
         values. Sustainable luxury is the future.",
    );

    TemplateSet::new(general)
        .with_context("professional", professional)
        .with_context("creative", creative)
}

/// Resolves the built-in template set for a system persona id.
pub fn template_set_for(persona_id: &str) -> Option<TemplateSet> {
    match persona_id {
        "auntie-mae" => Some(healing_chef_templates()),
        "dr-feelgood" => Some(medical_guide_templates()),
        "isabella-chen" => Some(fashion_designer_templates()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::persona::get_default_personas;

    #[test]
    fn every_system_persona_has_a_template_set() {
        for persona in get_default_personas() {
            assert!(
                template_set_for(&persona.id).is_some(),
                "missing template set for {}",
                persona.id
            );
        }
    }

    #[test]
    fn healing_chef_cooking_keywords_resolve() {
        let set = healing_chef_templates();
        let table = set.resolve("cooking");
        assert!(table.select("any good recipe?").contains("grandmother"));
        assert!(table.select("completely unrelated").contains("first medicine"));
    }

    #[test]
    fn unknown_context_falls_back_to_general() {
        let set = fashion_designer_templates();
        let reply = set.resolve("cooking").select("nothing matches here");
        assert!(reply.contains("inspire and guide"));
    }
}
