use std::collections::BTreeSet;

use wordforge_core::substitutions_for;

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Expand one word into its case and substitution variants.
///
/// The set always holds the lowercase, capitalized and uppercase forms.
/// With `use_replacements`, every substitutable position of the lowercase
/// form yields one variant per replacement, with only that position changed.
pub fn expand_word(word: &str, use_replacements: bool) -> BTreeSet<String> {
    let lower = word.to_lowercase();
    let mut variants = BTreeSet::new();
    variants.insert(capitalize(&lower));
    variants.insert(lower.to_uppercase());

    if use_replacements {
        for (index, ch) in lower.char_indices() {
            let Some(replacements) = substitutions_for(ch) else {
                continue;
            };
            let (head, rest) = lower.split_at(index);
            let tail = &rest[ch.len_utf8()..];
            for replacement in replacements {
                variants.insert(format!("{head}{replacement}{tail}"));
            }
        }
    }

    variants.insert(lower);
    variants
}

/// Build the variant pool for a list of input words.
///
/// Each word's variants are deduplicated, but the pool keeps duplicates
/// across words: two inputs that expand to the same variant contribute it
/// twice, and both copies take part in permutations.
pub fn expand_inputs<S: AsRef<str>>(inputs: &[S], use_replacements: bool) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|word| expand_word(word.as_ref(), use_replacements))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn case_forms_without_replacements() {
        assert_eq!(expand_word("John", false), set(&["john", "John", "JOHN"]));
    }

    #[test]
    fn replaces_one_position_at_a_time() {
        let variants = expand_word("Sara", true);
        assert_eq!(
            variants,
            set(&[
                "sara", "Sara", "SARA", "$ara", "5ara", "s@ra", "s4ra", "sar@", "sar4"
            ])
        );
        assert!(!variants.contains("$@r@"));
    }

    #[test]
    fn digits_collapse_to_one_variant() {
        assert_eq!(expand_word("1990", true), set(&["1990"]));
    }

    #[test]
    fn empty_word_yields_empty_variant() {
        assert_eq!(expand_word("", true), set(&[""]));
    }

    #[test]
    fn pool_keeps_cross_word_duplicates() {
        let pool = expand_inputs(&["ann", "ANN"], false);
        assert_eq!(pool.len(), 6);
        assert_eq!(pool.iter().filter(|word| *word == "Ann").count(), 2);
    }
}
