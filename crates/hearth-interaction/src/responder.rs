//! Scripted reply generation.
//!
//! The responder selects a reply from the persona's template tables, then
//! layers on the fixed personality suffixes (continuity note when relevant
//! memories exist, tone clause from the outfit family). Text selection is a
//! pure function of its inputs; the simulated thinking delay is the only
//! nondeterministic part and never influences the text.

use crate::templates::TemplateSet;
use hearth_core::avatar::OutfitFamily;
use hearth_core::error::{HearthError, Result};
use hearth_core::persona::Persona;
use hearth_core::session::SessionStore;
use minijinja::{Environment, context};
use once_cell::sync::Lazy;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Continuity suffix appended when relevant memories exist for the input.
pub const MEMORY_SUFFIX: &str =
    " I remember when we talked about this before - you're making such progress.";

static TEMPLATE_ENV: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// Simulated thinking time, sampled uniformly per reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ThinkingDelay {
    /// The relaxed variant used by show screens.
    pub fn relaxed() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 3000,
        }
    }

    /// No delay at all; test and scripting convenience.
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            min_ms: 800,
            max_ms: 2000,
        }
    }
}

/// Produces scripted replies for one persona, consulting its session store
/// for memories, the active outfit, and the user's name.
pub struct ScriptedResponder {
    persona: Persona,
    templates: TemplateSet,
    delay: ThinkingDelay,
    store: Arc<SessionStore>,
}

impl ScriptedResponder {
    pub fn new(persona: Persona, templates: TemplateSet, store: Arc<SessionStore>) -> Self {
        Self {
            persona,
            templates,
            delay: ThinkingDelay::default(),
            store,
        }
    }

    /// Overrides the thinking delay range.
    pub fn with_delay(mut self, delay: ThinkingDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Generates a reply for non-empty user input within a context.
    ///
    /// Sets the store's processing flag for the duration of the simulated
    /// delay and clears it on completion or error. Whitespace-only input is
    /// rejected; callers are expected to guard for it.
    pub async fn generate(&self, user_input: &str, context: &str) -> Result<String> {
        let input = user_input.trim();
        if input.is_empty() {
            return Err(HearthError::invalid_input("empty user input"));
        }

        self.store.set_processing(true).await;
        tokio::time::sleep(self.delay.sample()).await;

        let result = self.compose(input, context).await;

        self.store.set_processing(false).await;
        result
    }

    /// Like [`Self::generate`], but surfaces any failure as the persona's
    /// fixed in-character apology instead of an error.
    pub async fn generate_or_apologize(&self, user_input: &str, context: &str) -> String {
        match self.generate(user_input, context).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(persona = %self.persona.id, error = %err, "reply generation failed");
                self.persona.apology.clone()
            }
        }
    }

    async fn compose(&self, input: &str, context: &str) -> Result<String> {
        let has_memories = !self.store.relevant_memories(input).await.is_empty();
        let outfit = self.store.current_outfit().await;
        let user_name = self.store.user_name().await;
        let display_name = self.persona.display_name(&user_name);

        compose_reply(
            &self.templates,
            context,
            input,
            display_name,
            has_memories,
            &outfit,
        )
    }
}

/// Assembles the reply text. Pure: two calls with identical arguments
/// produce identical strings.
pub fn compose_reply(
    templates: &TemplateSet,
    context: &str,
    input: &str,
    display_name: &str,
    has_relevant_memories: bool,
    outfit_id: &str,
) -> Result<String> {
    let table = templates.resolve(context);
    let template = table.select(&input.to_lowercase());

    let mut reply = TEMPLATE_ENV
        .render_str(template, context! { name => display_name })
        .map_err(|err| HearthError::internal(format!("template render failed: {err}")))?;

    if has_relevant_memories {
        reply.push_str(MEMORY_SUFFIX);
    }
    if let Some(family) = OutfitFamily::classify(outfit_id) {
        reply.push_str(family.tone_clause());
    }

    Ok(reply)
}
