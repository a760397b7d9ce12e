//! Longest-match prefix translation rules.

use crate::alphabet::replace_yo;
use memchr::memchr;
use tracing::warn;

/// Ordered prefix table. Iteration order is the match priority: longest
/// source prefix first, first occurrence wins on duplicates.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    entries: Vec<(String, String)>,
}

impl PrefixTable {
    pub fn parse(text: &str) -> Self {
        let mut raw = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let lowered = line.to_lowercase();
            let Some(tab) = memchr(b'\t', lowered.as_bytes()) else {
                warn!(row = line, "prefix row without a tab separator, skipped");
                continue;
            };
            let src = replace_yo(&lowered[..tab]);
            if src.is_empty() {
                // An empty prefix would match every word forever.
                warn!(row = line, "prefix row with an empty source, skipped");
                continue;
            }
            let tgt = lowered[tab + 1..]
                .split('\t')
                .next()
                .unwrap_or_default()
                .to_string();
            raw.push((src, tgt));
        }
        raw.sort_by_key(|(src, _)| std::cmp::Reverse(src.chars().count()));

        let mut entries: Vec<(String, String)> = Vec::new();
        for (src, tgt) in raw {
            if !entries.iter().any(|(s, _)| *s == src) {
                entries.push((src, tgt));
            }
        }
        Self { entries }
    }

    /// Prefixes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
