use std::collections::BTreeSet;

use wordforge_core::GenerationConfig;

/// Concatenation arities enumerated independently of patterns.
pub const CONCAT_ARITIES: [usize; 2] = [1, 2];

/// Output of the combinatorial assembler.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub words: BTreeSet<String>,
    /// Pattern fills that passed the length filter.
    pub pattern_matches: u64,
    /// Plain concatenations that passed the length filter.
    pub concat_matches: u64,
    /// Symbol-decorated forms emitted for accepted concatenations.
    pub decorated: u64,
}

/// Number of ordered `r`-arrangements without repetition over `n` items.
pub fn estimate_permutations(n: usize, r: usize) -> u128 {
    if r > n {
        return 0;
    }
    ((n - r + 1)..=n).fold(1_u128, |acc, value| acc.saturating_mul(value as u128))
}

/// Total arrangements the assembler will visit for a pool and config.
pub fn estimate_work(pool_len: usize, config: &GenerationConfig) -> u128 {
    let patterns = config
        .patterns
        .iter()
        .map(|pattern| estimate_permutations(pool_len, pattern.slots()));
    let concats = CONCAT_ARITIES
        .iter()
        .map(|r| estimate_permutations(pool_len, *r));
    patterns
        .chain(concats)
        .fold(0_u128, |acc, value| acc.saturating_add(value))
}

/// Visit every ordered arrangement of `r` distinct pool positions.
///
/// Positions are distinct, values are not: equal variants at different
/// positions still pair with each other.
pub fn for_each_permutation<F>(n: usize, r: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if r > n {
        return;
    }
    let mut chosen = Vec::with_capacity(r);
    let mut used = vec![false; n];
    permute(n, r, &mut chosen, &mut used, &mut visit);
}

fn permute<F>(n: usize, r: usize, chosen: &mut Vec<usize>, used: &mut [bool], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if chosen.len() == r {
        visit(chosen);
        return;
    }
    for index in 0..n {
        if used[index] {
            continue;
        }
        used[index] = true;
        chosen.push(index);
        permute(n, r, chosen, used, visit);
        chosen.pop();
        used[index] = false;
    }
}

/// Assemble pattern fills and concatenations from a variant pool.
///
/// Only undecorated words are length-checked. Once a concatenation passes,
/// each symbol is appended and prepended to it without re-checking length.
pub fn assemble(pool: &[String], config: &GenerationConfig) -> Assembly {
    let mut assembly = Assembly::default();

    for pattern in &config.patterns {
        for_each_permutation(pool.len(), pattern.slots(), |indices| {
            let parts: Vec<&str> = indices.iter().map(|index| pool[*index].as_str()).collect();
            let word = pattern.fill(&parts);
            if config.accepts(&word) {
                assembly.pattern_matches += 1;
                assembly.words.insert(word);
            }
        });
    }

    for r in CONCAT_ARITIES {
        for_each_permutation(pool.len(), r, |indices| {
            let combined: String = indices.iter().map(|index| pool[*index].as_str()).collect();
            if !config.accepts(&combined) {
                return;
            }
            assembly.concat_matches += 1;
            if config.use_symbols {
                for symbol in &config.symbols {
                    assembly.words.insert(format!("{combined}{symbol}"));
                    assembly.words.insert(format!("{symbol}{combined}"));
                    assembly.decorated += 2;
                }
            }
            assembly.words.insert(combined);
        });
    }

    assembly
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_counts() {
        assert_eq!(estimate_permutations(3, 2), 6);
        assert_eq!(estimate_permutations(5, 3), 60);
        assert_eq!(estimate_permutations(2, 3), 0);
        assert_eq!(estimate_permutations(4, 0), 1);
    }

    #[test]
    fn visits_ordered_arrangements_without_repetition() {
        let mut seen = Vec::new();
        for_each_permutation(3, 2, |indices| seen.push(indices.to_vec()));
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1]
            ]
        );
    }

    #[test]
    fn no_visits_when_pool_is_too_small() {
        let mut count = 0;
        for_each_permutation(1, 2, |_| count += 1);
        assert_eq!(count, 0);
    }
}
