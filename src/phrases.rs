//! Multi-word phrase translations, stored as a trie keyed by word sequence.

use crate::alphabet::replace_yo;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A trie node is either a terminal holding the translated phrase or an
/// interior map to the next word.
#[derive(Debug, Clone)]
pub enum PhraseNode {
    Leaf(String),
    Interior(HashMap<String, PhraseNode>),
}

impl PhraseNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            PhraseNode::Leaf(tgt) => Some(tgt),
            PhraseNode::Interior(_) => None,
        }
    }

    pub fn child(&self, word: &str) -> Option<&PhraseNode> {
        match self {
            PhraseNode::Leaf(_) => None,
            PhraseNode::Interior(children) => children.get(word),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhraseTree {
    root: HashMap<String, PhraseNode>,
}

impl PhraseTree {
    pub fn parse(text: &str) -> Self {
        Self::from_entries(parse_phrase_entries(text))
    }

    /// Build the trie. Entries are inserted longest source phrase first so
    /// that a shorter phrase sharing a prefix never plants a terminal in the
    /// middle of a longer one's path.
    pub fn from_entries(mut entries: Vec<(String, String)>) -> Self {
        entries.sort_by_key(|(src, _)| std::cmp::Reverse(src.chars().count()));

        let mut root: HashMap<String, PhraseNode> = HashMap::new();
        for (src, tgt) in &entries {
            insert(&mut root, src, tgt);
        }
        debug!(entries = entries.len(), "phrase tree built");
        Self { root }
    }

    pub fn child(&self, word: &str) -> Option<&PhraseNode> {
        self.root.get(word)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// Parse tab-separated `source phrase \t translation` lines, lowercased,
/// with the yo fold applied to the source side.
pub fn parse_phrase_entries(text: &str) -> Vec<(String, String)> {
    let lowered = text.to_lowercase();
    let mut entries = Vec::new();
    for line in lowered.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split('\t');
        let src = parts.next().unwrap_or_default();
        let Some(tgt) = parts.next() else {
            warn!(row = line, "phrase row without a tab separator, skipped");
            continue;
        };
        entries.push((replace_yo(src), tgt.to_string()));
    }
    entries
}

fn insert(root: &mut HashMap<String, PhraseNode>, src: &str, tgt: &str) {
    let words: Vec<&str> = src.split(' ').collect();
    let mut node = root;
    for (i, word) in words.iter().enumerate() {
        let last = i == words.len() - 1;
        let next = node.entry(word.to_string()).or_insert_with(|| {
            if last {
                PhraseNode::Leaf(tgt.to_string())
            } else {
                PhraseNode::Interior(HashMap::new())
            }
        });
        match next {
            PhraseNode::Interior(children) => node = children,
            // An existing terminal already governs this path; insertion
            // never overwrites it.
            PhraseNode::Leaf(_) => return,
        }
    }
}
