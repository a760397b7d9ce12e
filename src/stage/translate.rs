use crate::{
    alphabet::is_token_char,
    context::Context,
    stage::{Stage, StageError},
    translator::Translator,
};
use std::borrow::Cow;
use std::sync::Arc;

/// Dictionary translation pass.
pub struct Translate {
    translator: Arc<Translator>,
}

impl Translate {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self { translator }
    }
}

impl Stage for Translate {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.settings.translate && text.chars().any(is_token_char))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !ctx.settings.translate {
            return Ok(text);
        }
        Ok(Cow::Owned(self.translator.translate(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Settings;
    use crate::phonetic::Trasianka;
    use crate::prefixes::PrefixTable;
    use crate::translator::TranslationTables;

    fn stage() -> Translate {
        let translator = Translator::new(
            TranslationTables::default(),
            PrefixTable::default(),
            Arc::new(Trasianka::parse("о а\n")),
        );
        Translate::new(Arc::new(translator))
    }

    #[test]
    fn skips_when_translation_is_off() {
        let ctx = Context::new(Settings {
            translate: false,
            transliterate: None,
        });
        assert!(!stage().needs_apply("слово", &ctx).unwrap());
    }

    #[test]
    fn skips_text_without_word_tokens() {
        let ctx = Context::default();
        assert!(!stage().needs_apply("123 ... !?", &ctx).unwrap());
        assert!(stage().needs_apply("слово", &ctx).unwrap());
    }

    #[test]
    fn applies_the_fallback_chain() {
        let ctx = Context::default();
        let out = stage().apply(Cow::Borrowed("кот"), &ctx).unwrap();
        assert_eq!(out, "кат");
    }
}
