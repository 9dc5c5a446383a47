use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wordforge_core::{RandomConfig, text_len};
use wordforge_generate::random::{rng_for, synthesize};

fn lowercase_only(count: usize, min_len: usize, max_len: usize) -> RandomConfig {
    RandomConfig {
        count,
        min_len,
        max_len,
        use_upper: false,
        use_digits: false,
        use_symbols: false,
        ..RandomConfig::default()
    }
}

#[test]
fn fixed_length_lowercase_words() {
    let config = lowercase_only(5, 6, 6);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let outcome = synthesize(&config, &mut rng);

    assert!(outcome.attempts <= 15);
    assert_eq!(outcome.words.len(), 5);
    for word in &outcome.words {
        assert_eq!(text_len(word), 6);
        assert!(word.chars().all(|ch| ch.is_ascii_lowercase()), "{word}");
    }
}

#[test]
fn affixes_wrap_every_word_within_bounds() {
    let config = RandomConfig {
        count: 20,
        min_len: 6,
        max_len: 10,
        prefix: "ab".to_string(),
        suffix: "99".to_string(),
        ..RandomConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = synthesize(&config, &mut rng);

    assert!(!outcome.words.is_empty());
    assert!(outcome.attempts <= 60);
    for word in &outcome.words {
        assert!(word.starts_with("ab"), "{word}");
        assert!(word.ends_with("99"), "{word}");
        let len = text_len(word);
        assert!((6..=10).contains(&len), "{word}");
    }
}

#[test]
fn custom_pools_restrict_characters() {
    let config = RandomConfig {
        count: 10,
        min_len: 8,
        max_len: 8,
        use_upper: false,
        custom_digits: "7".to_string(),
        custom_symbols: "#".to_string(),
        ..RandomConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let outcome = synthesize(&config, &mut rng);
    for word in &outcome.words {
        assert!(
            word.chars()
                .all(|ch| ch.is_ascii_lowercase() || ch == '7' || ch == '#'),
            "{word}"
        );
    }
}

#[test]
fn same_seed_same_words() {
    let config = RandomConfig {
        seed: Some(99),
        ..RandomConfig::default()
    };
    let first = synthesize(&config, &mut rng_for(&config));
    let second = synthesize(&config, &mut rng_for(&config));
    assert_eq!(first.words, second.words);
    assert_eq!(first.attempts, second.attempts);
}

#[test]
fn small_space_under_produces_without_error() {
    // Only 26 single-letter words exist, so 3 * 40 draws cannot reach 40.
    let config = lowercase_only(40, 1, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let outcome = synthesize(&config, &mut rng);
    assert_eq!(outcome.attempts, 120);
    assert!(outcome.words.len() <= 26);
}

#[test]
fn affixes_longer_than_max_len_produce_nothing() {
    let config = RandomConfig {
        count: 5,
        min_len: 1,
        max_len: 4,
        prefix: "abc".to_string(),
        suffix: "de".to_string(),
        ..RandomConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let outcome = synthesize(&config, &mut rng);
    assert!(outcome.words.is_empty());
    assert_eq!(outcome.attempts, 0);
}

#[test]
fn zero_count_draws_nothing() {
    let config = lowercase_only(0, 6, 8);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let outcome = synthesize(&config, &mut rng);
    assert!(outcome.words.is_empty());
    assert_eq!(outcome.attempts, 0);
}
