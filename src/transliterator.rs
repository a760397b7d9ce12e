//! Context-sensitive transliteration rule engine (Cyrillic → Łacinka).
//!
//! Rule tables are line-oriented:
//!
//! ```text
//! [halosnyja]
//! а е ё і о у ы э ю я
//! ^я ja
//! [halosnyja]я ja
//! я ia
//! л ł
//! ```
//!
//! A `[name]` line followed by a member line defines a character class; any
//! other non-blank line is a `pattern replacement` rule (empty replacement
//! deletes). A pattern edge is either a literal word boundary (`^`/`$`) or a
//! `[name]` context class constraining the adjacent character. Matching is
//! an explicit scan over code points; no pattern compilation.

use crate::alphabet::{capitalize, is_boundary, to_lower};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
enum Edge {
    /// No constraint.
    #[default]
    Open,
    /// Text edge, whitespace or boundary punctuation.
    Boundary,
    /// Adjacent character must belong to the named class (lowercased
    /// members; an undefined class resolves to the empty set and the rule
    /// can never match).
    Class(Vec<char>),
}

impl Edge {
    fn accepts(&self, adjacent: Option<char>) -> bool {
        match self {
            Edge::Open => true,
            Edge::Boundary => is_boundary(adjacent),
            Edge::Class(members) => {
                adjacent.is_some_and(|c| members.contains(&to_lower(c)))
            }
        }
    }
}

#[derive(Debug, Clone)]
struct TranslitRule {
    /// Pattern core as written in the table (lowercase by convention).
    core: Vec<char>,
    start: Edge,
    end: Edge,
    replacement: String,
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<TranslitRule>,
}

impl RuleSet {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut classes: HashMap<&str, Vec<char>> = HashMap::new();
        let mut raw: Vec<(&str, &str)> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            i += 1;
            if line.is_empty() {
                continue;
            }
            if is_class_header(line) {
                let name = &line[1..line.len() - 1];
                let members = lines
                    .get(i)
                    .map(|ln| ln.split_whitespace().flat_map(str::chars).map(to_lower))
                    .into_iter()
                    .flatten()
                    .collect();
                classes.insert(name, members);
                i += 1;
                continue;
            }
            let mut parts = line.split_whitespace();
            let pattern = parts.next().unwrap_or_default();
            let replacement = parts.next().unwrap_or_default();
            raw.push((pattern, replacement));
        }

        // Multi-character sequences must be tried before their substrings:
        // sort by core length (anchors and class refs excluded), descending.
        raw.sort_by_key(|(pattern, _)| std::cmp::Reverse(core_len(pattern)));

        let mut rules = Vec::new();
        for (pattern, replacement) in raw {
            let Some(rule) = parse_rule(pattern, replacement, &classes) else {
                warn!(pattern, "unparseable transliteration rule, skipped");
                continue;
            };
            rules.push(rule);
        }
        debug!(rules = rules.len(), classes = classes.len(), "rule set built");
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order; each rule performs a global left-to-right
    /// replacement over the output of the previous one.
    pub fn apply(&self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        for rule in &self.rules {
            chars = apply_rule(&chars, rule);
        }
        chars.into_iter().collect()
    }
}

fn is_class_header(line: &str) -> bool {
    line.len() > 2
        && line.starts_with('[')
        && line.ends_with(']')
        && !line[1..].contains('[')
        && !line.contains(char::is_whitespace)
}

fn core_len(pattern: &str) -> usize {
    let mut core = pattern;
    if let Some(rest) = core.strip_prefix('^') {
        core = rest;
    } else if core.starts_with('[')
        && let Some(end) = core.find(']')
    {
        core = &core[end + 1..];
    }
    if let Some(rest) = core.strip_suffix('$') {
        core = rest;
    } else if core.ends_with(']')
        && let Some(start) = core.rfind('[')
    {
        core = &core[..start];
    }
    core.chars().count()
}

fn parse_rule(
    pattern: &str,
    replacement: &str,
    classes: &HashMap<&str, Vec<char>>,
) -> Option<TranslitRule> {
    let mut core = pattern;
    let mut start = Edge::Open;
    let mut end = Edge::Open;

    if let Some(rest) = core.strip_prefix('^') {
        start = Edge::Boundary;
        core = rest;
    } else if core.starts_with('[') {
        let close = core.find(']')?;
        start = resolve_class(&core[1..close], classes);
        core = &core[close + 1..];
    }
    if let Some(rest) = core.strip_suffix('$') {
        end = Edge::Boundary;
        core = rest;
    } else if core.ends_with(']') {
        let open = core.rfind('[')?;
        end = resolve_class(&core[open + 1..core.len() - 1], classes);
        core = &core[..open];
    }
    if core.is_empty() {
        return None;
    }

    Some(TranslitRule {
        core: core.chars().collect(),
        start,
        end,
        replacement: replacement.to_string(),
    })
}

fn resolve_class(name: &str, classes: &HashMap<&str, Vec<char>>) -> Edge {
    match classes.get(name) {
        Some(members) => Edge::Class(members.clone()),
        None => {
            warn!(class = name, "reference to undefined character class");
            Edge::Class(Vec::new())
        }
    }
}

fn apply_rule(chars: &[char], rule: &TranslitRule) -> Vec<char> {
    let n = rule.core.len();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if matches_at(chars, i, rule) {
            let span = &chars[i..i + n];
            let exact = span.iter().zip(&rule.core).all(|(a, b)| a == b);
            if exact {
                out.extend(rule.replacement.chars());
            } else {
                // Any cased occurrence gets a capitalized replacement; this
                // only approximates all-caps spans, which is the documented
                // behavior of the original.
                out.extend(capitalize(&rule.replacement).chars());
            }
            i += n;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn matches_at(chars: &[char], i: usize, rule: &TranslitRule) -> bool {
    let n = rule.core.len();
    if i + n > chars.len() {
        return false;
    }
    let matches_core = rule
        .core
        .iter()
        .zip(&chars[i..i + n])
        .all(|(p, c)| to_lower(*p) == to_lower(*c));
    matches_core
        && rule.start.accepts(if i == 0 { None } else { Some(chars[i - 1]) })
        && rule.end.accepts(chars.get(i + n).copied())
}
