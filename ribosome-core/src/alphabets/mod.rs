pub mod ambiguity;
pub mod dna;
pub mod protein;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;

#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Position and value of the first symbol outside the alphabet.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .enumerate()
            .find(|(_, &b)| !self.contains(b))
            .map(|(pos, &b)| (pos, b))
    }
}

/// Every nucleotide a codon may be written with: both `T` and `U`, plus the
/// IUPAC ambiguity codes. The gap is not a codon symbol.
pub fn codon_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTURYSWKMBDHVN")
}
