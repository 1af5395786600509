use crate::alphabets::Alphabet;

pub const STOP: u8 = b'*';
pub const UNKNOWN: u8 = b'X';

pub fn alphabet() -> Alphabet {
    Alphabet::new(&b"ARNDCEQGHILKMFPSTWYV"[..])
}

/// Standard residues, the stop sentinel and the ambiguity codes B, Z, J and X.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ARNDCEQGHILKMFPSTWYV*XBZJ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iupac_extends_standard() {
        assert!(iupac_alphabet().is_word(alphabet().symbols.iter().map(|s| s as u8)));
        assert!(iupac_alphabet().is_word(b"BZJX*"));
        assert!(!iupac_alphabet().is_word(b"O"));
        assert!(!iupac_alphabet().is_word(b"U"));
    }
}
