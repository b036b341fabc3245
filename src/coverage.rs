//! Alphabet coverage report for a piece of text.
//!
//! Used by the CLI's check mode to vet a corpus before encoding: which
//! characters fall outside the alphabet, and how often.

use std::collections::BTreeMap;

use crate::codec::SymbolCodec;

pub struct Coverage {
    /// Characters scanned.
    pub total: usize,
    /// Characters that are alphabet members.
    pub covered: usize,
    /// Occurrence count per character outside the alphabet, in code point
    /// order so reports are deterministic.
    pub unknown: BTreeMap<char, usize>,
}

impl Coverage {
    pub fn scan(codec: &SymbolCodec, text: &str) -> Self {
        let mut total = 0;
        let mut covered = 0;
        let mut unknown: BTreeMap<char, usize> = BTreeMap::new();
        for ch in text.chars() {
            total += 1;
            if codec.contains(ch) {
                covered += 1;
            } else {
                *unknown.entry(ch).or_insert(0) += 1;
            }
        }
        Coverage {
            total,
            covered,
            unknown,
        }
    }

    /// True when every scanned character is an alphabet member.
    pub fn is_full(&self) -> bool {
        self.covered == self.total
    }

    pub fn unknown_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.unknown.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_coverage_on_alphabet_text() {
        let codec = SymbolCodec::new();
        let cov = Coverage::scan(&codec, "Question: 2 + 2 = 4?\n");
        // '+' is not in the alphabet.
        assert!(!cov.is_full());
        assert_eq!(cov.unknown.get(&'+'), Some(&1));

        let cov = Coverage::scan(&codec, "Question: what now…\n");
        assert!(cov.is_full());
        assert_eq!(cov.total, cov.covered);
    }

    #[test]
    fn counts_each_unknown_occurrence() {
        let codec = SymbolCodec::new();
        let cov = Coverage::scan(&codec, "€5 + €10");
        assert_eq!(cov.unknown.get(&'€'), Some(&2));
        assert_eq!(cov.unknown.get(&'+'), Some(&1));
        assert_eq!(cov.covered, cov.total - 3);
        assert_eq!(cov.unknown_chars().collect::<Vec<_>>(), vec!['+', '€']);
    }

    #[test]
    fn empty_text_is_fully_covered() {
        let codec = SymbolCodec::new();
        let cov = Coverage::scan(&codec, "");
        assert!(cov.is_full());
        assert_eq!(cov.total, 0);
    }
}
