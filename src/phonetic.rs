//! Phonetic fallback for words absent from every dictionary structure.
//!
//! The transducer is a best-effort approximation: an ordered cascade of
//! substring replacements that turns a source-language word into something
//! pronounceable in the target language. It is only consulted after the
//! dictionary, phrase tree and prefix table have all missed.

use tracing::debug;

/// Capability interface for the fallback transducer injected into the
/// translator.
pub trait Phonetic: Send + Sync {
    fn transduce(&self, word: &str) -> String;
}

#[derive(Debug, Clone)]
struct PhoneticRule {
    /// Pattern with anchors stripped, lowercase as written in the table.
    core: Vec<char>,
    at_start: bool,
    at_end: bool,
    replacement: String,
}

/// The "trasianka" rule cascade.
#[derive(Debug, Clone, Default)]
pub struct Trasianka {
    rules: Vec<PhoneticRule>,
}

impl Trasianka {
    /// Parse space-separated `pattern replacement` lines. Rules are ordered
    /// by raw pattern length descending and applied sequentially — each
    /// rule's output feeds the next.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<&str> = text
            .lines()
            .filter(|ln| !ln.is_empty() && !ln.starts_with('#'))
            .collect();
        lines.sort_by_key(|ln| {
            std::cmp::Reverse(ln.split(' ').next().unwrap_or_default().chars().count())
        });

        let mut rules = Vec::new();
        for line in lines {
            let mut parts = line.split(' ');
            let mut pattern = parts.next().unwrap_or_default();
            let replacement = parts.next().unwrap_or_default();
            let at_start = pattern.starts_with('^');
            if at_start {
                pattern = &pattern[1..];
            }
            let at_end = pattern.ends_with('$');
            if at_end {
                pattern = &pattern[..pattern.len() - 1];
            }
            let core: Vec<char> = pattern.chars().collect();
            if core.is_empty() {
                continue;
            }
            rules.push(PhoneticRule {
                core,
                at_start,
                at_end,
                replacement: replacement.to_string(),
            });
        }
        debug!(rules = rules.len(), "phonetic rule cascade built");
        Self { rules }
    }

    /// Case-insensitive match of `rule.core` at position `pos`.
    fn matches_at(chars: &[char], pos: usize, rule: &PhoneticRule) -> bool {
        if pos + rule.core.len() > chars.len() {
            return false;
        }
        if rule.at_start && pos != 0 {
            return false;
        }
        if rule.at_end && pos + rule.core.len() != chars.len() {
            return false;
        }
        rule.core
            .iter()
            .zip(&chars[pos..pos + rule.core.len()])
            .all(|(p, c)| *p == crate::alphabet::to_lower(*c))
    }

    fn apply_rule(word: &str, rule: &PhoneticRule) -> String {
        let chars: Vec<char> = word.chars().collect();
        let mut out = String::with_capacity(word.len());
        let mut i = 0;
        while i < chars.len() {
            if Self::matches_at(&chars, i, rule) {
                out.push_str(&rule.replacement);
                i += rule.core.len();
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }
}

impl Phonetic for Trasianka {
    fn transduce(&self, word: &str) -> String {
        self.rules
            .iter()
            .fold(word.to_string(), |acc, rule| Self::apply_rule(&acc, rule))
    }
}
