//! Per-call configuration passed to every pipeline stage.

/// Transliteration rule-table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Classic orthography Łacinka.
    Classic,
    /// Official (geographic) romanization.
    Official,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Official => "official",
        }
    }
}

/// What the pipeline should do with a given text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Apply the dictionary translation pass.
    pub translate: bool,
    /// Apply the script-conversion pass with this rule table, or skip it.
    pub transliterate: Option<Variant>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translate: true,
            transliterate: Some(Variant::Classic),
        }
    }
}

/// Runtime context handed to every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub settings: Settings,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
