use crate::{
    context::{Context, Variant},
    stage::{Stage, StageError},
    transliterator::RuleSet,
};
use std::borrow::Cow;
use std::collections::HashMap;

/// Script-conversion pass. Holds one rule set per registered variant; the
/// call settings pick which one runs.
pub struct Transliterate {
    variants: HashMap<Variant, RuleSet>,
}

impl Transliterate {
    pub fn new(variants: HashMap<Variant, RuleSet>) -> Self {
        Self { variants }
    }
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    fn needs_apply(&self, _text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx
            .settings
            .transliterate
            .is_some_and(|v| self.variants.contains_key(&v)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let Some(variant) = ctx.settings.transliterate else {
            return Ok(text);
        };
        let Some(rules) = self.variants.get(&variant) else {
            return Err(StageError::Failed(
                self.name(),
                format!("no rule table registered for variant `{}`", variant.name()),
            ));
        };
        Ok(Cow::Owned(rules.apply(&text)))
    }
}
