use crate::alphabets::Alphabet;
use std::sync::LazyLock;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// Bases, IUPAC ambiguity codes and the gap, in either case.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTRYSWKMBDHVN-acgtryswkmbdhvn")
}

const GAP: u8 = b'-';

fn pairing_table(from: &[u8], to: &[u8]) -> [u8; 256] {
    let mut table = [GAP; 256];
    from.iter().zip(to.iter()).for_each(|(&a, &b)| {
        table[a as usize] = b;
        table[a.to_ascii_lowercase() as usize] = b;
    });
    table
}

static COMPLEMENT: LazyLock<[u8; 256]> =
    LazyLock::new(|| pairing_table(b"ACGTRYSWKMBDHVN-", b"TGCAYRSWMKVHDBN-"));

// Same pairing as the complement, except that A pairs with U.
static TRANSCRIPTION: LazyLock<[u8; 256]> =
    LazyLock::new(|| pairing_table(b"ACGTRYSWKMBDHVN-", b"UGCAYRSWMKVHDBN-"));

/// Uppercase complement of `a`; anything without a partner becomes a gap.
#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

/// RNA base paired with the template base `a`.
#[inline]
pub fn transcribe(a: u8) -> u8 {
    TRANSCRIPTION[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"gaUUaca"));
        assert!(!iupac_alphabet().is_word(b"GAUUACA"));
    }

    #[test]
    fn complement_covers_ambiguity_and_gap() {
        let out: Vec<u8> = b"ATGCGAATTCAGRYKMSWBDHV-N"
            .iter()
            .map(|&a| complement(a))
            .collect();
        assert_eq!(out, b"TACGCTTAAGTCYRMKSWVHDB-N");
    }

    #[test]
    fn complement_is_uppercase() {
        assert_eq!(complement(b'a'), b'T');
        assert_eq!(complement(b'r'), b'Y');
    }

    #[test]
    fn unknown_symbol_becomes_gap() {
        assert_eq!(complement(b'X'), b'-');
        assert_eq!(complement(b'U'), b'-');
        assert_eq!(transcribe(b'X'), b'-');
    }

    #[test]
    fn transcription_pairs_a_with_u() {
        let out: Vec<u8> = b"atgcgaattcag".iter().map(|&a| transcribe(a)).collect();
        assert_eq!(out, b"UACGCUUAAGUC");
    }
}
