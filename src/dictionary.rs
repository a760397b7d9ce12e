//! Dictionary expansion from morphological ending tables.
//!
//! The base dictionary pairs one source word form with one target word form.
//! For every pair whose two sides match an ending from the same group, the
//! builder substitutes every slot variant of that ending on both sides at
//! once, generating the whole paradigm from a single line.

use crate::alphabet::replace_yo;
use crate::endings::EndingsCollection;
use memchr::memchr;
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::{debug, warn};

pub type WordPair = (String, String);

/// Every inflected source form mapped to its translation.
pub type ExtendedDictionary = HashMap<String, String>;

/// Characters that mark a line as unsupported by the pair format.
const UNSUPPORTED: [char; 4] = [' ', '.', '«', '»'];

/// Parse tab-separated word-pair lines. Both columns are lowercased; the
/// source column additionally gets the yo fold so it can serve as a lookup
/// key. Lines with unsupported characters or no tab are skipped.
pub fn parse_word_pairs(text: &str) -> Vec<WordPair> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        if line.is_empty() || line.starts_with('#') || line.contains(UNSUPPORTED) {
            continue;
        }
        let Some(tab) = memchr(b'\t', line.as_bytes()) else {
            warn!(row = line, "word-pair row without a tab separator, skipped");
            continue;
        };
        let src = &line[..tab];
        let tgt = line[tab + 1..].split('\t').next().unwrap_or_default();
        pairs.push((
            replace_yo(&src.to_lowercase()),
            tgt.to_lowercase(),
        ));
    }
    pairs
}

/// The longest ending of `word` found in any group: the ending string plus
/// every group (in registration order) that contains it.
struct MatchedEndings<'a> {
    ending: &'a str,
    groups: SmallVec<[&'a str; 4]>,
}

fn matched_endings<'a>(word: &str, ends: &'a EndingsCollection) -> MatchedEndings<'a> {
    let mut max_len = 0usize;
    let mut matched: &'a str = "";
    let mut groups: SmallVec<[&'a str; 4]> = SmallVec::new();
    for group in ends.groups() {
        for row in &group.rows {
            let end = row.canonical.as_str();
            if end == matched {
                groups.push(group.name.as_str());
            } else {
                let len = end.chars().count();
                if len > max_len && word.ends_with(end) {
                    max_len = len;
                    matched = end;
                    groups.clear();
                    groups.push(group.name.as_str());
                }
            }
        }
    }
    MatchedEndings {
        ending: matched,
        groups,
    }
}

/// Build the extended dictionary.
///
/// Seeding order fixes the priority: explicit word-form overrides first
/// (never overwritten), then the literal base pairs, then the generated
/// inflections — each generated form is inserted only if its source key is
/// still absent, so earlier-registered forms always win.
pub fn build_extended(
    pairs: &[WordPair],
    forms: &[WordPair],
    src_ends: &EndingsCollection,
    tgt_ends: &EndingsCollection,
) -> ExtendedDictionary {
    let mut extended = ExtendedDictionary::new();

    for (src, tgt) in forms {
        extended.entry(src.clone()).or_insert_with(|| tgt.clone());
    }
    let overrides: std::collections::HashSet<String> = extended.keys().cloned().collect();

    // Literal pairs next; a later duplicate replaces an earlier one, but an
    // override key is untouchable.
    for (src, tgt) in pairs {
        if !overrides.contains(src.as_str()) {
            extended.insert(src.clone(), tgt.clone());
        }
    }

    for (src, tgt) in pairs {
        expand_pair(src, tgt, src_ends, tgt_ends, &mut extended);
    }

    debug!(entries = extended.len(), "extended dictionary built");
    extended
}

fn expand_pair(
    src: &str,
    tgt: &str,
    src_ends: &EndingsCollection,
    tgt_ends: &EndingsCollection,
    extended: &mut ExtendedDictionary,
) {
    let m_src = matched_endings(src, src_ends);
    let m_tgt = matched_endings(tgt, tgt_ends);
    let common: SmallVec<[&str; 4]> = m_src
        .groups
        .iter()
        .copied()
        .filter(|g| m_tgt.groups.contains(g))
        .collect();
    if common.is_empty() || src.chars().count() == 1 || tgt.chars().count() == 1 {
        return;
    }

    let src_stem = &src[..src.len() - m_src.ending.len()];
    let tgt_stem = &tgt[..tgt.len() - m_tgt.ending.len()];

    // First write wins, in group-registration then slot order.
    let mut chosen: Vec<(&str, &str)> = Vec::new();
    for group in &common {
        let Some(src_row) = src_ends.get(group).and_then(|g| g.row(m_src.ending)) else {
            continue;
        };
        let Some(tgt_row) = tgt_ends.get(group).and_then(|g| g.row(m_tgt.ending)) else {
            continue;
        };
        for (i, sv) in src_row.variants.iter().enumerate() {
            if chosen.iter().any(|(s, _)| s == sv) {
                continue;
            }
            let Some(tv) = tgt_row.variants.get(i) else {
                warn!(
                    group = *group,
                    ending = m_src.ending,
                    slot = i,
                    "missing target variant slot, skipped"
                );
                continue;
            };
            chosen.push((sv, tv));
        }
    }

    for (sv, tv) in chosen {
        let new_src = replace_yo(&format!("{src_stem}{sv}"));
        let new_tgt = format!("{tgt_stem}{tv}");
        extended.entry(new_src).or_insert(new_tgt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ru_ends() -> EndingsCollection {
        EndingsCollection::parse("@m\nр\tр\tра\tру\tром\tре\n@verb\nлась\tлась\tлось\tлись\n")
    }

    fn be_ends() -> EndingsCollection {
        EndingsCollection::parse("@m\nр\tр\tра\tру\tрам\tры\n@verb\nлася\tлася\tлася\tліся\n")
    }

    #[test]
    fn parses_pairs_lowercased_and_folded() {
        let pairs = parse_word_pairs("Ещё\tяшчэ\nплохая\tдрэнная\n");
        assert_eq!(pairs[0], ("еще".to_string(), "яшчэ".to_string()));
        assert_eq!(pairs[1], ("плохая".to_string(), "дрэнная".to_string()));
    }

    #[test]
    fn rejects_unsupported_lines() {
        let pairs = parse_word_pairs("a b\tc\nт.е.\tгзн\n«слово»\tслова\nдом\tдом\n");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "дом");
    }

    #[test]
    fn skips_rows_without_tab() {
        assert!(parse_word_pairs("одинокий\n").is_empty());
    }

    #[test]
    fn expands_all_slots_of_a_matched_group() {
        let pairs = parse_word_pairs("директор\tдырэктар\n");
        let dict = build_extended(&pairs, &[], &ru_ends(), &be_ends());
        assert_eq!(dict["директор"], "дырэктар");
        assert_eq!(dict["директора"], "дырэктара");
        assert_eq!(dict["директору"], "дырэктару");
        assert_eq!(dict["директором"], "дырэктарам");
        assert_eq!(dict["директоре"], "дырэктары");
    }

    #[test]
    fn expands_verb_past_forms() {
        let pairs = parse_word_pairs("получилась\tатрымалася\n");
        let dict = build_extended(&pairs, &[], &ru_ends(), &be_ends());
        assert_eq!(dict["получилось"], "атрымалася");
        assert_eq!(dict["получились"], "атрымаліся");
    }

    #[test]
    fn literal_pair_survives_when_no_group_matches() {
        let pairs = parse_word_pairs("вчера\tучора\n");
        let dict = build_extended(&pairs, &[], &ru_ends(), &be_ends());
        assert_eq!(dict["вчера"], "учора");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn single_letter_words_are_never_expanded() {
        let pairs = parse_word_pairs("р\tр\n");
        let dict = build_extended(&pairs, &[], &ru_ends(), &be_ends());
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn forms_override_generated_entries() {
        let pairs = parse_word_pairs("директор\tдырэктар\n");
        let forms = parse_word_pairs("директору\tкіраўніку\n");
        let dict = build_extended(&pairs, &forms, &ru_ends(), &be_ends());
        assert_eq!(dict["директору"], "кіраўніку");
        assert_eq!(dict["директора"], "дырэктара");
    }

    #[test]
    fn forms_override_literal_pairs() {
        let pairs = parse_word_pairs("вчера\tнекалі\n");
        let forms = parse_word_pairs("вчера\tучора\n");
        let dict = build_extended(&pairs, &forms, &ru_ends(), &be_ends());
        assert_eq!(dict["вчера"], "учора");
    }

    #[test]
    fn first_generated_form_wins() {
        // Two base pairs generating the same inflected source form: the
        // earlier pair's expansion stands.
        let pairs = parse_word_pairs("директор\tдырэктар\nдиректора\tначальніка\n");
        let dict = build_extended(&pairs, &[], &ru_ends(), &be_ends());
        // The literal pair is seeded before any expansion runs.
        assert_eq!(dict["директора"], "начальніка");
        // A slot only the first pair generates.
        assert_eq!(dict["директором"], "дырэктарам");
    }

    #[test]
    fn longest_ending_wins_within_a_group() {
        let src = EndingsCollection::parse("@g\nа\tа\tы\nлась\tлась\tлось\n");
        let tgt = EndingsCollection::parse("@g\nа\tа\tы\nлася\tлася\tлася\n");
        let pairs = parse_word_pairs("получилась\tатрымалася\n");
        let dict = build_extended(&pairs, &[], &src, &tgt);
        // `лась` (4 chars) must beat `а` (1 char).
        assert_eq!(dict["получилось"], "атрымалася");
        assert!(!dict.contains_key("получиласы"));
    }
}
