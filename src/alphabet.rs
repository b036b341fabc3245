//! The canonical 85-character alphabet.
//!
//! Position in this array IS the index: the character at position `i` encodes
//! as `i`. The ordering is a compatibility contract — reordering or inserting
//! entries changes every previously encoded index, so the table is append-only
//! in spirit and frozen in practice.

/// Number of characters in the alphabet.
pub const ALPHABET_LEN: usize = 85;

/// The ordered alphabet: newline, space, common punctuation, digits, `:` `=`
/// `?`, uppercase and lowercase ASCII letters, then the accented and
/// typographic characters (`é ê î ù`, en/em dash, right single quote,
/// ellipsis).
///
/// This array is the single source of truth; the reverse map in
/// [`crate::SymbolCodec`] is derived from it at construction and can never
/// drift out of sync.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    '\n', ' ', '!', '"', '\'', '(', ')', '*', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ':', '=', '?',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '\u{e9}', '\u{ea}', '\u{ee}', '\u{f9}',
    '\u{2013}', '\u{2014}', '\u{2019}', '\u{2026}',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_duplicate_entries() {
        let mut seen = std::collections::HashSet::new();
        for &ch in ALPHABET.iter() {
            assert!(seen.insert(ch), "duplicate alphabet entry {:?}", ch);
        }
        assert_eq!(seen.len(), ALPHABET_LEN);
    }

    #[test]
    fn known_anchor_positions() {
        assert_eq!(ALPHABET[0], '\n');
        assert_eq!(ALPHABET[1], ' ');
        assert_eq!(ALPHABET[25], 'A');
        assert_eq!(ALPHABET[76], 'z');
        assert_eq!(ALPHABET[84], '…');
    }
}
