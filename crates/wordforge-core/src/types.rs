use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Symbols used for decoration and random pools unless overridden.
pub const DEFAULT_SYMBOLS: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

/// Digits used for random pools unless overridden.
pub const DEFAULT_DIGITS: &str = "0123456789";

/// Patterns applied when the caller does not provide any.
pub const DEFAULT_PATTERNS: [&str; 3] = ["{}{}", "{}{}{}", "{}_{}"];

/// Single-character substitutions keyed by lowercase character.
pub const SUBSTITUTIONS: &[(char, &[&str])] = &[
    ('a', &["@", "4"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["$", "5"]),
];

/// Replacements registered for a lowercase character, if any.
pub fn substitutions_for(ch: char) -> Option<&'static [&'static str]> {
    SUBSTITUTIONS
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, reps)| *reps)
}

/// Length of a candidate word in Unicode scalar values.
pub fn text_len(value: &str) -> usize {
    value.chars().count()
}

/// Settings for variant expansion and combinatorial assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Minimum accepted word length (inclusive).
    pub min_len: usize,
    /// Maximum accepted word length (inclusive).
    pub max_len: usize,
    /// Emit symbol-decorated forms of concatenations.
    pub use_symbols: bool,
    /// Emit single-character substitution variants.
    pub use_replacements: bool,
    /// Templates applied to the variant pool, in order.
    pub patterns: Vec<Pattern>,
    /// Symbols appended/prepended when `use_symbols` is set.
    pub symbols: Vec<char>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_len: 6,
            max_len: 16,
            use_symbols: true,
            use_replacements: true,
            patterns: default_patterns(),
            symbols: DEFAULT_SYMBOLS.to_vec(),
        }
    }
}

impl GenerationConfig {
    /// True when `value` is within `[min_len, max_len]`.
    pub fn accepts(&self, value: &str) -> bool {
        let len = text_len(value);
        self.min_len <= len && len <= self.max_len
    }
}

pub(crate) fn default_patterns() -> Vec<Pattern> {
    DEFAULT_PATTERNS
        .iter()
        .filter_map(|template| Pattern::parse(template).ok())
        .collect()
}

/// Settings for the random synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Target number of distinct words.
    pub count: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    /// Fixed text placed before the random core.
    #[serde(default)]
    pub prefix: String,
    /// Fixed text placed after the random core.
    #[serde(default)]
    pub suffix: String,
    /// Replaces `0-9` in the pool when non-empty.
    #[serde(default)]
    pub custom_digits: String,
    /// Replaces the default symbol set in the pool when non-empty.
    #[serde(default)]
    pub custom_symbols: String,
    /// Seed for a reproducible run; fresh entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min_len: 6,
            max_len: 16,
            use_upper: true,
            use_digits: true,
            use_symbols: true,
            prefix: String::new(),
            suffix: String::new(),
            custom_digits: String::new(),
            custom_symbols: String::new(),
            seed: None,
        }
    }
}

impl RandomConfig {
    /// Inclusive core length range, or `None` when prefix and suffix leave
    /// no room for at least one random character.
    pub fn core_len_range(&self) -> Option<(usize, usize)> {
        let fixed = text_len(&self.prefix) + text_len(&self.suffix);
        let max = self.max_len.checked_sub(fixed)?;
        let min = self.min_len.saturating_sub(fixed).max(1);
        if max < min { None } else { Some((min, max)) }
    }

    /// Character pool drawn from with replacement.
    pub fn pool(&self) -> Vec<char> {
        let mut pool: Vec<char> = ('a'..='z').collect();
        if self.use_upper {
            pool.extend('A'..='Z');
        }
        if self.use_digits {
            if self.custom_digits.is_empty() {
                pool.extend(DEFAULT_DIGITS.chars());
            } else {
                pool.extend(self.custom_digits.chars());
            }
        }
        if self.use_symbols {
            if self.custom_symbols.is_empty() {
                pool.extend(DEFAULT_SYMBOLS);
            } else {
                pool.extend(self.custom_symbols.chars());
            }
        }
        pool
    }

    /// Maximum number of candidates tried before giving up.
    pub fn attempt_budget(&self) -> usize {
        self.count.saturating_mul(3)
    }
}

/// Final sorted, deduplicated output of a generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wordlist(Vec<String>);

impl Wordlist {
    pub fn from_set(words: BTreeSet<String>) -> Self {
        Self(words.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
