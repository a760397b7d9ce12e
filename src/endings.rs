//! Parser for grouped morphological ending tables.
//!
//! Table layout:
//!
//! ```text
//! # comment
//! @group-name
//! canonical<TAB>variant0<TAB>variant1<TAB>…
//! ```
//!
//! `variant0` conventionally equals the canonical (nominative) ending; the
//! position of each variant encodes a grammatical case/number slot. Groups
//! shared between a source-language and a target-language table correspond
//! slot-by-slot, which is what makes dictionary expansion possible.

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndingsError {
    #[error(
        "group `{group}`: ending `{canonical}` has {found} variants, expected {expected} (lock-step mismatch)"
    )]
    LockStep {
        group: String,
        canonical: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone)]
pub struct EndingRow {
    /// Canonical (nominative) ending; always equals `variants[0]`.
    pub canonical: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EndingsGroup {
    pub name: String,
    pub rows: Vec<EndingRow>,
}

impl EndingsGroup {
    pub fn row(&self, canonical: &str) -> Option<&EndingRow> {
        self.rows.iter().find(|r| r.canonical == canonical)
    }
}

/// Ordered collection of ending groups.
///
/// Registration order is load-bearing: the dictionary builder's tie-break
/// picks the first matched group in this order, so groups live in a `Vec`
/// rather than a hash map.
#[derive(Debug, Clone, Default)]
pub struct EndingsCollection {
    groups: Vec<EndingsGroup>,
}

impl EndingsCollection {
    pub fn parse(text: &str) -> Self {
        let mut groups: Vec<EndingsGroup> = Vec::new();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('@') {
                // Reopening a group resets it; the header always becomes the
                // target for subsequent rows.
                if let Some(idx) = groups.iter().position(|g| g.name == name) {
                    groups[idx].rows.clear();
                    current = Some(idx);
                } else {
                    groups.push(EndingsGroup {
                        name: name.to_string(),
                        rows: Vec::new(),
                    });
                    current = Some(groups.len() - 1);
                }
                continue;
            }
            let Some(idx) = current else {
                warn!(row = line, "ending row before any @group header, skipped");
                continue;
            };
            let variants: Vec<String> = line.split('\t').map(str::to_string).collect();
            let canonical = variants[0].clone();
            groups[idx].rows.push(EndingRow {
                canonical,
                variants,
            });
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[EndingsGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&EndingsGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Verify the lock-step invariant against `other`: within every group
    /// present in both collections, every variant list (on either side) has
    /// the same length.
    pub fn check_lock_step(&self, other: &EndingsCollection) -> Result<(), EndingsError> {
        for group in &self.groups {
            let Some(twin) = other.get(&group.name) else {
                continue;
            };
            let Some(expected) = group
                .rows
                .first()
                .or_else(|| twin.rows.first())
                .map(|r| r.variants.len())
            else {
                continue;
            };
            for row in group.rows.iter().chain(&twin.rows) {
                if row.variants.len() != expected {
                    return Err(EndingsError::LockStep {
                        group: group.name.clone(),
                        canonical: row.canonical.clone(),
                        expected,
                        found: row.variants.len(),
                    });
                }
            }
        }
        Ok(())
    }
}
