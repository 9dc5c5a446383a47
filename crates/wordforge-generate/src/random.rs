use std::collections::BTreeSet;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use wordforge_core::RandomConfig;

/// Words produced by the random synthesizer.
#[derive(Debug, Clone, Default)]
pub struct RandomOutcome {
    pub words: BTreeSet<String>,
    /// Candidates drawn, accepted or not.
    pub attempts: usize,
}

/// Build the rng for a random config: seeded when a seed is set, otherwise
/// seeded from the thread-local entropy source.
pub fn rng_for(config: &RandomConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::seed_from_u64(rand::random()),
    }
}

/// Synthesize up to `config.count` distinct random words.
///
/// At most `3 * count` candidates are drawn. Each candidate is
/// `prefix + core + suffix` where the core length is uniform over the range
/// left by the affixes and characters are drawn uniformly with replacement
/// from the pool. Fewer than `count` words is a valid outcome.
pub fn synthesize<R: Rng + ?Sized>(config: &RandomConfig, rng: &mut R) -> RandomOutcome {
    let mut outcome = RandomOutcome::default();
    let budget = config.attempt_budget();
    if budget == 0 {
        return outcome;
    }

    let Some((core_min, core_max)) = config.core_len_range() else {
        warn!(
            max_len = config.max_len,
            prefix = %config.prefix,
            suffix = %config.suffix,
            "prefix and suffix leave no room for random characters"
        );
        return outcome;
    };
    let pool = config.pool();

    while outcome.attempts < budget && outcome.words.len() < config.count {
        outcome.attempts += 1;
        let core_len = rng.random_range(core_min..=core_max);
        let mut word = String::with_capacity(config.prefix.len() + core_len + config.suffix.len());
        word.push_str(&config.prefix);
        for _ in 0..core_len {
            if let Some(ch) = pool.choose(rng) {
                word.push(*ch);
            }
        }
        word.push_str(&config.suffix);

        let len = wordforge_core::text_len(&word);
        if config.min_len <= len && len <= config.max_len {
            outcome.words.insert(word);
        }
    }

    outcome
}
