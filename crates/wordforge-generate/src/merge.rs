use std::collections::BTreeSet;

use wordforge_core::Wordlist;

/// Union assembled and random words into the final sorted wordlist.
pub fn merge<I>(assembled: BTreeSet<String>, random: I) -> Wordlist
where
    I: IntoIterator<Item = String>,
{
    let mut words = assembled;
    words.extend(random);
    Wordlist::from_set(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_dedups_and_sorts() {
        let assembled: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        let random = vec!["c".to_string(), "a".to_string(), "B".to_string()];
        let wordlist = merge(assembled, random);
        assert_eq!(wordlist.as_slice(), ["B", "a", "b", "c"]);
    }

    #[test]
    fn empty_inputs_give_empty_wordlist() {
        let wordlist = merge(BTreeSet::new(), Vec::new());
        assert!(wordlist.is_empty());
    }
}
