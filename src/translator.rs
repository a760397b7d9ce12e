//! Word and phrase translation over free text.
//!
//! The scan walks maximal runs of word-token characters, tries the phrase
//! tree first, then the dictionary, then prefix stripping, and finally the
//! phonetic fallback. Everything between tokens is copied verbatim. The
//! reassembled text gets one global post-pass restoring the short-U glide.

use crate::alphabet::{copy_case, is_short_u_vowel, is_token_char, replace_yo};
use crate::dictionary::ExtendedDictionary;
use crate::phonetic::Phonetic;
use crate::phrases::PhraseTree;
use crate::prefixes::PrefixTable;
use std::sync::{Arc, RwLock};
use tracing::trace;

/// The swappable half of the translator state. The user-editable overlay
/// rebuilds these two structures wholesale; endings and prefixes are fixed
/// for the process lifetime.
#[derive(Debug, Default)]
pub struct TranslationTables {
    pub dictionary: ExtendedDictionary,
    pub phrases: PhraseTree,
}

pub struct Translator {
    tables: RwLock<Arc<TranslationTables>>,
    prefixes: PrefixTable,
    fallback: Arc<dyn Phonetic>,
}

impl Translator {
    pub fn new(
        tables: TranslationTables,
        prefixes: PrefixTable,
        fallback: Arc<dyn Phonetic>,
    ) -> Self {
        Self {
            tables: RwLock::new(Arc::new(tables)),
            prefixes,
            fallback,
        }
    }

    /// Replace the dictionary and phrase tree in one atomic swap. In-flight
    /// translations keep the snapshot they started with.
    pub fn swap_tables(&self, tables: TranslationTables) {
        let mut slot = self.tables.write().unwrap_or_else(|e| e.into_inner());
        *slot = Arc::new(tables);
    }

    fn snapshot(&self) -> Arc<TranslationTables> {
        let slot = self.tables.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&slot)
    }

    pub fn translate(&self, text: &str) -> String {
        let tables = self.snapshot();
        let tokens = scan_tokens(text);
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        let mut ti = 0;
        while ti < tokens.len() {
            let (start, end) = tokens[ti];
            out.push_str(&text[pos..start]);
            if let Some((consumed, translated)) =
                match_phrase(text, &tokens, ti, &tables.phrases)
            {
                let span_end = tokens[ti + consumed - 1].1;
                trace!(phrase = &text[start..span_end], "phrase match");
                out.push_str(&copy_case(&text[start..span_end], &translated));
                pos = span_end;
                ti += consumed;
                continue;
            }
            let word = &text[start..end];
            let translated = self.translate_word(&word.to_lowercase(), &tables);
            out.push_str(&copy_case(word, &translated));
            pos = end;
            ti += 1;
        }
        out.push_str(&text[pos..]);
        fix_short_u(&out)
    }

    /// Translate one lowercased token. Total: the fallback transducer
    /// answers for every word the lookup structures miss.
    fn translate_word(&self, lowered: &str, tables: &TranslationTables) -> String {
        let key = replace_yo(lowered);
        if let Some(tgt) = tables.dictionary.get(&key) {
            return tgt.clone();
        }
        for (src_prefix, tgt_prefix) in self.prefixes.iter() {
            let Some(rest) = key.strip_prefix(src_prefix) else {
                continue;
            };
            let (hyphen, rest) = match rest.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", rest),
            };
            // Prefixes are non-empty, so every recursion shrinks the key.
            let translated = self.translate_word(rest, tables);
            return format!("{tgt_prefix}{hyphen}{translated}");
        }
        self.fallback.transduce(lowered)
    }
}

/// Byte ranges of maximal word-token runs.
fn scan_tokens(text: &str) -> Vec<(usize, usize)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if is_token_char(c) {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            tokens.push((s, i));
        }
    }
    if let Some(s) = start {
        tokens.push((s, text.len()));
    }
    tokens
}

/// Walk the phrase tree from token `ti`. Consecutive tokens qualify only
/// when separated by exactly one literal space; any other gap ends the scan.
fn match_phrase(
    text: &str,
    tokens: &[(usize, usize)],
    ti: usize,
    phrases: &PhraseTree,
) -> Option<(usize, String)> {
    let (start, end) = tokens[ti];
    let mut node = phrases.child(&replace_yo(&text[start..end].to_lowercase()))?;
    let mut count = 1;
    loop {
        if let Some(tgt) = node.as_leaf() {
            return Some((count, tgt.to_string()));
        }
        let prev_end = tokens[ti + count - 1].1;
        let &(next_start, next_end) = tokens.get(ti + count)?;
        if &text[prev_end..next_start] != " " {
            return None;
        }
        node = node.child(&replace_yo(&text[next_start..next_end].to_lowercase()))?;
        count += 1;
    }
}

/// Rewrite `у` as the glide `ў` wherever a vowel precedes it, optionally
/// across a single whitespace character. The triggering vowel is consumed:
/// a glide just produced never serves as context for the next position.
pub fn fix_short_u(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_short_u_vowel(c) {
            if let Some(&next) = chars.get(i + 1) {
                if let Some(glide) = as_glide(next) {
                    out.push(c);
                    out.push(glide);
                    i += 2;
                    continue;
                }
                if next.is_whitespace()
                    && let Some(glide) = chars.get(i + 2).copied().and_then(as_glide)
                {
                    out.push(c);
                    out.push(next);
                    out.push(glide);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

fn as_glide(c: char) -> Option<char> {
    match c {
        'у' => Some('ў'),
        'У' => Some('Ў'),
        _ => None,
    }
}
