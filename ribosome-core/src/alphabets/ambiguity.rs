//! IUPAC ambiguity codes and the concrete symbols they stand for.
//!
//! Nucleotide variants are written in the RNA alphabet, because codon tables
//! are keyed by `U`.

/// Concrete nucleotides implied by an ambiguity code, or `None` when `n` is
/// not an ambiguity code.
pub fn nucleotide_variants(n: u8) -> Option<&'static [u8]> {
    let variants: &'static [u8] = match n {
        b'R' => b"AG",
        b'Y' => b"CU",
        b'S' => b"GC",
        b'W' => b"AU",
        b'K' => b"GU",
        b'M' => b"AC",
        b'B' => b"CGU",
        b'D' => b"AGU",
        b'H' => b"ACU",
        b'V' => b"ACG",
        b'N' => b"ACGU",
        _ => return None,
    };
    Some(variants)
}

/// Concrete amino acids implied by an ambiguity code, or `None` when `aa` is
/// not an ambiguity code.
pub fn amino_acid_variants(aa: u8) -> Option<&'static [u8]> {
    let variants: &'static [u8] = match aa {
        b'B' => b"ND",
        b'Z' => b"QE",
        b'J' => b"LI",
        b'X' => b"ACDEFGHIKLMNPQRSTVWY",
        _ => return None,
    };
    Some(variants)
}

/// Variants of `n`, falling back to `n` itself.
#[inline]
pub fn expand_nucleotide(n: &u8) -> &[u8] {
    nucleotide_variants(*n).unwrap_or(std::slice::from_ref(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleotide_codes() {
        assert_eq!(nucleotide_variants(b'Y'), Some(&b"CU"[..]));
        assert_eq!(nucleotide_variants(b'N').map(<[u8]>::len), Some(4));
        assert_eq!(nucleotide_variants(b'A'), None);
        assert_eq!(nucleotide_variants(b'-'), None);
    }

    #[test]
    fn amino_acid_codes() {
        assert_eq!(amino_acid_variants(b'J'), Some(&b"LI"[..]));
        assert_eq!(amino_acid_variants(b'X').map(<[u8]>::len), Some(20));
        assert_eq!(amino_acid_variants(b'M'), None);
    }

    #[test]
    fn expand_falls_back_to_self() {
        assert_eq!(expand_nucleotide(&b'G'), b"G");
        assert_eq!(expand_nucleotide(&b'M'), b"AC");
    }
}
