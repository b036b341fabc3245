//! Bidirectional symbol ↔ index codec over the fixed alphabet.
//!
//! Character → index is a `HashMap` lookup; index → character is direct
//! array indexing. Both structures come from the one ordered table in
//! [`crate::alphabet`]: the map is built by a single pass over the array at
//! construction, so the two directions cannot disagree.
//!
//! The codec is read-only after `new()` and safe to share across threads
//! without coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::alphabet::{ALPHABET, ALPHABET_LEN};
use crate::error::CodecError;

pub struct SymbolCodec {
    chars: &'static [char; ALPHABET_LEN],
    index: HashMap<char, usize>,
}

impl SymbolCodec {
    pub fn new() -> Self {
        let mut index = HashMap::with_capacity(ALPHABET_LEN);
        for (i, &ch) in ALPHABET.iter().enumerate() {
            let prev = index.insert(ch, i);
            debug_assert!(prev.is_none(), "duplicate alphabet entry {:?}", ch);
        }
        SymbolCodec {
            chars: &ALPHABET,
            index,
        }
    }

    /// Process-wide instance, built on first use.
    pub fn global() -> &'static SymbolCodec {
        static CODEC: OnceLock<SymbolCodec> = OnceLock::new();
        CODEC.get_or_init(SymbolCodec::new)
    }

    /// Index assigned to `ch`, or [`CodecError::UnknownSymbol`] if `ch` is
    /// not in the alphabet. Exact match only — no normalization, no
    /// case-folding, no substitute character.
    #[inline]
    pub fn index_of(&self, ch: char) -> Result<usize, CodecError> {
        self.index
            .get(&ch)
            .copied()
            .ok_or(CodecError::UnknownSymbol { ch })
    }

    /// Character assigned to `index`, or [`CodecError::IndexOutOfRange`] if
    /// `index >= len()`.
    #[inline]
    pub fn char_at(&self, index: usize) -> Result<char, CodecError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(CodecError::IndexOutOfRange {
                index,
                len: ALPHABET_LEN,
            })
    }

    /// Alphabet cardinality (85). Callers sizing downstream structures such
    /// as one-hot vectors should use this rather than hardcoding the count.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Encode a string to indices, strictly: the first character outside the
    /// alphabet fails the whole call.
    pub fn encode(&self, text: &str) -> Result<Vec<usize>, CodecError> {
        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            out.push(self.index_of(ch)?);
        }
        Ok(out)
    }

    /// Decode indices back to a string, strictly: the first out-of-range
    /// index fails the whole call.
    pub fn decode(&self, indices: &[usize]) -> Result<String, CodecError> {
        let mut out = String::with_capacity(indices.len());
        for &i in indices {
            out.push(self.char_at(i)?);
        }
        Ok(out)
    }
}

impl Default for SymbolCodec {
    fn default() -> Self {
        SymbolCodec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_symbol() {
        let codec = SymbolCodec::new();
        for &ch in ALPHABET.iter() {
            let i = codec.index_of(ch).unwrap();
            assert_eq!(codec.char_at(i).unwrap(), ch);
        }
        for i in 0..codec.len() {
            let ch = codec.char_at(i).unwrap();
            assert_eq!(codec.index_of(ch).unwrap(), i);
        }
    }

    #[test]
    fn len_is_85() {
        let codec = SymbolCodec::new();
        assert_eq!(codec.len(), 85);
        assert!(!codec.is_empty());
    }

    #[test]
    fn anchor_indices() {
        let codec = SymbolCodec::new();
        assert_eq!(codec.index_of('\n').unwrap(), 0);
        assert_eq!(codec.index_of(' ').unwrap(), 1);
        assert_eq!(codec.index_of('A').unwrap(), 25);
        assert_eq!(codec.index_of('z').unwrap(), 76);
        assert_eq!(codec.char_at(0).unwrap(), '\n');
        assert_eq!(codec.char_at(84).unwrap(), '…');
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let codec = SymbolCodec::new();
        assert_eq!(
            codec.index_of('€'),
            Err(CodecError::UnknownSymbol { ch: '€' })
        );
        assert!(!codec.contains('€'));
        // Lookup is exact: no case folding, no accent stripping.
        assert!(codec.contains('é'));
        assert!(!codec.contains('É'));
    }

    #[test]
    fn index_out_of_range_is_reported() {
        let codec = SymbolCodec::new();
        assert_eq!(
            codec.char_at(85),
            Err(CodecError::IndexOutOfRange { index: 85, len: 85 })
        );
        assert_eq!(
            codec.char_at(usize::MAX),
            Err(CodecError::IndexOutOfRange {
                index: usize::MAX,
                len: 85
            })
        );
    }

    #[test]
    fn encode_decode_round_trip() {
        let codec = SymbolCodec::new();
        let text = "Un été – c'est fini…\n";
        let indices = codec.encode(text).unwrap();
        assert_eq!(codec.decode(&indices).unwrap(), text);
    }

    #[test]
    fn encode_fails_on_first_unknown() {
        let codec = SymbolCodec::new();
        assert_eq!(
            codec.encode("ok € ok"),
            Err(CodecError::UnknownSymbol { ch: '€' })
        );
    }

    #[test]
    fn decode_fails_on_out_of_range() {
        let codec = SymbolCodec::new();
        assert_eq!(
            codec.decode(&[0, 1, 85]),
            Err(CodecError::IndexOutOfRange { index: 85, len: 85 })
        );
    }

    #[test]
    fn lookups_are_stable() {
        let codec = SymbolCodec::new();
        for _ in 0..3 {
            assert_eq!(codec.index_of('Q').unwrap(), 41);
            assert_eq!(codec.char_at(41).unwrap(), 'Q');
        }
    }
}
