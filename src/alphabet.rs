//! Character classes and case utilities shared by the translator and the
//! transliterator.
//!
//! The word-token alphabet mirrors the source-language token set: the
//! Cyrillic letters used by Russian and Belarusian, both apostrophe forms,
//! and the hyphen (so `чего-то` and `аб'ект` scan as single tokens).

use phf::{Set, phf_set};

/// Member of the word-token alphabet. Maximal runs of these characters form
/// the tokens the translator operates on; everything else passes through.
#[inline(always)]
pub const fn is_token_char(c: char) -> bool {
    matches!(c,
        '\u{0027}' | // apostrophe
        '\u{2019}' | // right single quotation mark, used as apostrophe
        '-' |
        'Ё' | 'І' | 'Ў' |
        '\u{0410}'..='\u{044F}' | // А..я
        'ё' | 'і' | 'ў' |
        '\u{04E2}' | '\u{04E3}'
    )
}

/// Vowels that turn a following `у` into the short-U glide `ў`.
pub static SHORT_U_VOWELS: Set<char> = phf_set! {
    'а', 'е', 'ё', 'і', 'о', 'у', 'ы', 'э', 'ю', 'я',
};

/// Punctuation treated as a word boundary by `^`/`$` transliteration
/// anchors, alongside whitespace and the text edges.
pub static BOUNDARY_PUNCTUATION: Set<char> = phf_set! {
    '.', ',', ':', ';', '!', '?', '…',
    '"', '\'', '«', '»', '„', '“', '”', '‘', '’',
    '(', ')', '[', ']', '{', '}',
    '-', '–', '—',
    '/', '\\', '|', '№', '&', '*', '+', '=', '<', '>', '_', '~',
};

/// True when `c` sits outside any word: missing (text edge), whitespace, or
/// boundary punctuation.
#[inline]
pub fn is_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c),
    }
}

#[inline(always)]
pub fn is_short_u_vowel(c: char) -> bool {
    SHORT_U_VOWELS.contains(&to_lower(c))
}

/// Single-char lowercase. The alphabets involved map 1:1, so the first
/// scalar of the full lowering is the whole answer.
#[inline(always)]
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[inline(always)]
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// A char that is already its own lowercase form (includes uncased chars
/// such as digits, hyphens and apostrophes).
#[inline(always)]
pub fn is_lower_or_uncased(c: char) -> bool {
    to_lower(c) == c
}

#[inline(always)]
pub fn is_upper_or_uncased(c: char) -> bool {
    to_upper(c) == c
}

/// Fold the stylistic vowel variant `ё` to its plain form `е`.
///
/// Dictionary keys, ending tables, prefix keys and looked-up words must all
/// go through this fold, otherwise lookups silently miss.
#[inline]
pub fn replace_yo(text: &str) -> String {
    text.replace('ё', "е")
}

/// Uppercase the first character, keep the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len() + 1);
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Copy the case shape of `src` onto `tgt`:
/// - lowercase (or uncased) first char ⇒ `tgt` unchanged,
/// - uppercase first and last chars ⇒ `tgt` fully uppercased,
/// - otherwise ⇒ only the first char of `tgt` capitalized.
pub fn copy_case(src: &str, tgt: &str) -> String {
    let Some(first) = src.chars().next() else {
        return tgt.to_string();
    };
    if is_lower_or_uncased(first) {
        return tgt.to_string();
    }
    let last = src.chars().next_back().unwrap_or(first);
    if is_upper_or_uncased(first) && is_upper_or_uncased(last) {
        return tgt.to_uppercase();
    }
    capitalize(tgt)
}
