//! Locale-aware ordering for facet labels.
//!
//! Approximates the root/French collator a browser uses for `localeCompare`:
//! base letters first (accents and case ignored), then accents, then case
//! with lowercase before uppercase. Raw code points break any remaining tie,
//! so two distinct labels never compare equal and sorting stays deterministic.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Sort key for a single label; field order is comparison order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: Vec<char>,
    accents: Vec<char>,
    case: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(value: &str) -> Self {
        let mut base = Vec::with_capacity(value.len());
        for c in value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
        {
            match expand_letter(c) {
                Some(letters) => base.extend(letters.chars()),
                None => base.push(c),
            }
        }
        let accents = value.nfd().flat_map(char::to_lowercase).collect();
        let case = value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect();

        Self {
            base,
            accents,
            case,
            raw: value.to_string(),
        }
    }
}

/// Base letters for characters NFD leaves whole (ligatures, barred and
/// stroked letters), as a collator weighs them at the first level.
fn expand_letter(c: char) -> Option<&'static str> {
    let letters = match c {
        'œ' => "oe",
        'æ' => "ae",
        'ß' => "ss",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ł' => "l",
        'ħ' => "h",
        'þ' => "th",
        _ => return None,
    };
    Some(letters)
}

/// Compares two labels in display order.
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sorts labels in place in display order.
pub fn sort_labels(labels: &mut [String]) {
    labels.sort_by_cached_key(|label| CollationKey::new(label));
}
