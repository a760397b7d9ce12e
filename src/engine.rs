//! Engine handle: owns the built lookup structures and the stage pipeline.
//!
//! All tables are parsed once in `EngineBuilder::build`; after that the
//! engine is shared by reference and every call is a pure function over the
//! built structures. The only mutation is `rebuild_user_overlay`, which
//! swaps the dictionary and phrase tree in one atomic step.

use crate::{
    context::{Context, Settings, Variant},
    dictionary::{WordPair, build_extended, parse_word_pairs},
    endings::{EndingsCollection, EndingsError},
    phonetic::{Phonetic, Trasianka},
    phrases::{PhraseTree, parse_phrase_entries},
    pipeline::Pipeline,
    prefixes::PrefixTable,
    stage::{StageError, translate::Translate, transliterate::Transliterate},
    translator::{TranslationTables, Translator},
    transliterator::RuleSet,
};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("endings table error: {0}")]
    Endings(#[from] EndingsError),
    #[error("no transliteration rule table for variant `{0}`")]
    UnknownVariant(&'static str),
}

/// The immutable inputs the overlay rebuild starts from.
struct BaseTables {
    pairs: Vec<WordPair>,
    forms: Vec<WordPair>,
    src_ends: EndingsCollection,
    tgt_ends: EndingsCollection,
    phrases: Vec<(String, String)>,
}

pub struct Engine {
    ctx: Context,
    pipeline: Pipeline,
    translator: Arc<Translator>,
    rules: HashMap<Variant, RuleSet>,
    base: BaseTables,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Run the full pipeline with the engine's default settings.
    pub fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, EngineError> {
        Ok(self.pipeline.process(text, &self.ctx)?)
    }

    /// Run the full pipeline with per-call settings.
    pub fn process_with<'a>(
        &self,
        settings: Settings,
        text: Cow<'a, str>,
    ) -> Result<Cow<'a, str>, EngineError> {
        Ok(self.pipeline.process(text, &Context::new(settings))?)
    }

    /// Dictionary translation only, no script conversion.
    pub fn translate(&self, text: &str) -> String {
        self.translator.translate(text)
    }

    /// Script conversion only, with an explicit variant.
    pub fn transliterate(&self, text: &str, variant: Variant) -> Result<String, EngineError> {
        let rules = self
            .rules
            .get(&variant)
            .ok_or(EngineError::UnknownVariant(variant.name()))?;
        Ok(rules.apply(text))
    }

    /// Rebuild the dictionary and phrase tree from the base tables plus a
    /// user-supplied overlay, then swap them in atomically. Overlay lines
    /// whose source column contains a space are phrase entries; the rest are
    /// word pairs. In-flight calls keep the snapshot they started with.
    pub fn rebuild_user_overlay(&self, overlay: &str) {
        let mut word_lines = String::new();
        let mut phrase_lines = String::new();
        for line in overlay.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let src = line.split('\t').next().unwrap_or_default();
            if src.contains(' ') {
                phrase_lines.push_str(line);
                phrase_lines.push('\n');
            } else {
                word_lines.push_str(line);
                word_lines.push('\n');
            }
        }

        // Overlay pairs come after the base pairs so a duplicate source word
        // resolves to the overlay translation.
        let mut pairs = self.base.pairs.clone();
        pairs.extend(parse_word_pairs(&word_lines));
        let dictionary = build_extended(
            &pairs,
            &self.base.forms,
            &self.base.src_ends,
            &self.base.tgt_ends,
        );

        // Trie insertion is first-wins among equal-length phrases, so the
        // overlay entries go in front of the base entries.
        let mut entries = parse_phrase_entries(&phrase_lines);
        entries.extend(self.base.phrases.iter().cloned());
        let phrases = PhraseTree::from_entries(entries);

        self.translator.swap_tables(TranslationTables {
            dictionary,
            phrases,
        });
        info!("user overlay rebuilt");
    }
}

#[derive(Default)]
pub struct EngineBuilder {
    dictionary: String,
    word_forms: String,
    src_endings: String,
    tgt_endings: String,
    phrases: String,
    prefixes: String,
    phonetic: Option<Arc<dyn Phonetic>>,
    variants: Vec<(Variant, String)>,
    settings: Settings,
}

impl EngineBuilder {
    /// Base word-pair dictionary text.
    pub fn dictionary(mut self, text: &str) -> Self {
        self.dictionary = text.to_string();
        self
    }

    /// Explicit word-form overrides, highest priority.
    pub fn word_forms(mut self, text: &str) -> Self {
        self.word_forms = text.to_string();
        self
    }

    /// Source- and target-language ending tables.
    pub fn endings(mut self, src: &str, tgt: &str) -> Self {
        self.src_endings = src.to_string();
        self.tgt_endings = tgt.to_string();
        self
    }

    pub fn phrases(mut self, text: &str) -> Self {
        self.phrases = text.to_string();
        self
    }

    pub fn prefixes(mut self, text: &str) -> Self {
        self.prefixes = text.to_string();
        self
    }

    /// Fallback transducer for out-of-dictionary words. Without one the
    /// fallback is the identity.
    pub fn phonetic<P: Phonetic + 'static>(mut self, phonetic: P) -> Self {
        self.phonetic = Some(Arc::new(phonetic));
        self
    }

    /// Register a transliteration rule table under a variant.
    pub fn variant(mut self, variant: Variant, rules: &str) -> Self {
        self.variants.push((variant, rules.to_string()));
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<Engine, EngineError> {
        let src_ends = EndingsCollection::parse(&self.src_endings);
        let tgt_ends = EndingsCollection::parse(&self.tgt_endings);
        src_ends.check_lock_step(&tgt_ends)?;

        let pairs = parse_word_pairs(&self.dictionary);
        let forms = parse_word_pairs(&self.word_forms);
        let dictionary = build_extended(&pairs, &forms, &src_ends, &tgt_ends);
        let phrase_entries = parse_phrase_entries(&self.phrases);
        let phrases = PhraseTree::from_entries(phrase_entries.clone());
        let prefixes = PrefixTable::parse(&self.prefixes);
        let fallback = self
            .phonetic
            .unwrap_or_else(|| Arc::new(Trasianka::default()));

        let translator = Arc::new(Translator::new(
            TranslationTables {
                dictionary,
                phrases,
            },
            prefixes,
            fallback,
        ));
        let rules: HashMap<Variant, RuleSet> = self
            .variants
            .into_iter()
            .map(|(variant, text)| (variant, RuleSet::parse(&text)))
            .collect();
        let pipeline = Pipeline::new(vec![
            Arc::new(Translate::new(Arc::clone(&translator))),
            Arc::new(Transliterate::new(rules.clone())),
        ]);
        info!(
            pairs = pairs.len(),
            forms = forms.len(),
            variants = rules.len(),
            "engine built"
        );

        Ok(Engine {
            ctx: Context::new(self.settings),
            pipeline,
            translator,
            rules,
            base: BaseTables {
                pairs,
                forms,
                src_ends,
                tgt_ends,
                phrases: phrase_entries,
            },
        })
    }
}
