use crate::alphabets::Alphabet;
use std::sync::LazyLock;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGUacgu")
}

pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGURYSWKMBDHVN-acguryswkmbdhvn")
}

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [b'-'; 256];
    b"ACGURYSWKMBDHVN-"
        .iter()
        .zip(b"UGCAYRSWMKVHDBN-".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a.to_ascii_lowercase() as usize] = b;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}
