//! Format validator for the community-editable supplementary dictionary.
//!
//! Detected violations are reported as a line-numbered list and the
//! offending lines are dropped from the `fixed` text handed back to the
//! caller. Partial success, never total failure.

use crate::alphabet::to_lower;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("file uses CRLF line endings, LF required")]
    CrlfLineEndings,
    #[error("empty lines are not allowed (except the last)")]
    EmptyLine,
    #[error("missing tab separator")]
    MissingTab,
    #[error("more than one tab separator")]
    MultipleTabs,
    #[error("stray whitespace around or inside a column")]
    ExtraWhitespace,
    #[error("apostrophe `\u{2019}` must be written as `'`")]
    ApostropheVariant,
    #[error("source column may contain only source-language letters")]
    SourceAlphabet,
    #[error("target column may contain only target-language letters")]
    TargetAlphabet,
}

/// One rejected line. `line` is 1-based; 0 means the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIssue {
    pub line: usize,
    pub issue: Issue,
}

#[derive(Debug, Clone, Default)]
pub struct Validation {
    pub issues: Vec<LineIssue>,
    /// The input with every rejected line removed.
    pub fixed: String,
}

impl Validation {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Letters acceptable in the source (Russian) column.
fn is_source_char(c: char) -> bool {
    matches!(to_lower(c), 'а'..='я' | 'ё' | '-' | '\'')
}

/// Letters acceptable in the target (Belarusian) column. The target
/// alphabet has no `и`, `щ` or `ъ` but adds `і` and `ў`.
fn is_target_char(c: char) -> bool {
    match to_lower(c) {
        'и' | 'щ' | 'ъ' => false,
        'а'..='я' | 'ё' | 'і' | 'ў' | '-' | '\'' => true,
        _ => false,
    }
}

fn column_fits(column: &str, alphabet: fn(char) -> bool) -> bool {
    column
        .split(' ')
        .all(|word| !word.is_empty() && word.chars().all(alphabet))
}

fn check_line(line: &str) -> Result<(), Issue> {
    let Some((src, rest)) = line.split_once('\t') else {
        return Err(Issue::MissingTab);
    };
    if rest.contains('\t') {
        return Err(Issue::MultipleTabs);
    }
    let tgt = rest;
    for part in [src, tgt] {
        if part.trim() != part || part.contains("  ") {
            return Err(Issue::ExtraWhitespace);
        }
    }
    if line.contains('\u{2019}') {
        return Err(Issue::ApostropheVariant);
    }
    if !column_fits(src, is_source_char) {
        return Err(Issue::SourceAlphabet);
    }
    if !column_fits(tgt, is_target_char) {
        return Err(Issue::TargetAlphabet);
    }
    Ok(())
}

pub fn validate_public_dictionary(text: &str) -> Validation {
    if text.contains('\r') {
        return Validation {
            issues: vec![LineIssue {
                line: 0,
                issue: Issue::CrlfLineEndings,
            }],
            fixed: String::new(),
        };
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut issues = Vec::new();
    let mut correct: Vec<&str> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('#') {
            correct.push(line);
            continue;
        }
        if line.is_empty() {
            if i == lines.len() - 1 {
                correct.push(line);
            } else {
                issues.push(LineIssue {
                    line: i + 1,
                    issue: Issue::EmptyLine,
                });
            }
            continue;
        }
        match check_line(line) {
            Ok(()) => correct.push(line),
            Err(issue) => issues.push(LineIssue {
                line: i + 1,
                issue,
            }),
        }
    }

    Validation {
        issues,
        fixed: correct.join("\n"),
    }
}
