use crate::alphabets::rna;
use crate::codon::CodonTable;
use crate::error::{BioError, BioResult};
use crate::seq::protein::ProteinSeq;
use crate::seq::traits::{NucleotideSeq, ReverseComplement, SeqBytes};
use crate::seq::MoleculeType;
use std::fmt;

/// Messenger RNA.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    /// Uppercases `bytes` and checks every symbol against the IUPAC RNA
    /// alphabet (gaps included). `T` is rejected.
    pub fn new(mut bytes: Vec<u8>) -> BioResult<Self> {
        bytes.make_ascii_uppercase();
        if let Some((pos, b)) = rna::iupac_alphabet().first_invalid(&bytes) {
            return Err(BioError::InvalidChar {
                ch: b as char,
                pos,
                molecule: MoleculeType::Rna,
            });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse(&self) -> Self {
        let mut out = self.bytes.clone();
        out.reverse();
        Self { bytes: out }
    }

    pub fn complement(&self) -> Self {
        let out = self.bytes.iter().map(|&base| rna::complement(base)).collect();
        Self { bytes: out }
    }

    pub fn reverse_complement(&self) -> Self {
        Self {
            bytes: rna::reverse_complement(self.as_bytes()),
        }
    }

    /// Translate from offset 0, dropping a trailing partial codon.
    pub fn translate(&self, table: &CodonTable) -> BioResult<ProteinSeq> {
        translate_bytes(self.as_bytes(), table)
    }
}

pub(crate) fn translate_bytes(bytes: &[u8], table: &CodonTable) -> BioResult<ProteinSeq> {
    if bytes.len() < 3 {
        return Err(BioError::TooShort { len: bytes.len() });
    }
    let protein = bytes
        .chunks_exact(3)
        .map(|codon| table.translate_codon(codon))
        .collect();
    Ok(ProteinSeq::from_bytes_unchecked(protein))
}

impl SeqBytes for RnaSeq {
    fn as_bytes(&self) -> &[u8] {
        RnaSeq::as_bytes(self)
    }
}

impl ReverseComplement for RnaSeq {
    fn reverse_complement(&self) -> Self {
        RnaSeq::reverse_complement(self)
    }
}

impl NucleotideSeq for RnaSeq {}

impl fmt::Display for RnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::codon_table;

    fn rna(s: &str) -> RnaSeq {
        RnaSeq::new(s.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn new_rejects_thymine() {
        match RnaSeq::new(b"AUGCCCATG".to_vec()) {
            Err(BioError::InvalidChar { ch, pos, molecule }) => {
                assert_eq!((ch, pos, molecule), ('T', 7, MoleculeType::Rna));
            }
            other => panic!("expected InvalidChar, got {other:?}"),
        }
    }

    #[test]
    fn new_uppercases() {
        assert_eq!(rna("augc").as_bytes(), b"AUGC");
    }

    #[test]
    fn complement_basic() {
        let s = rna("ACGU");
        assert_eq!(s.complement().as_bytes(), b"UGCA");
        assert_eq!(s.reverse_complement().as_bytes(), b"ACGU");
        assert_eq!(s.reverse().as_bytes(), b"UGCA");
    }

    #[test]
    fn translate_basic() {
        let table = codon_table(1).unwrap();
        assert_eq!(rna("AUGUUUAGU").translate(&table).unwrap().as_bytes(), b"MFS");
        assert_eq!(
            rna("AUGUUUAGUUAGGGCCAAAUG").translate(&table).unwrap().as_bytes(),
            b"MFS*GQM"
        );
    }

    #[test]
    fn translate_drops_trailing_partial_codon() {
        let table = codon_table(1).unwrap();
        assert_eq!(rna("AUGGCCA").translate(&table).unwrap().as_bytes(), b"MA");
        assert_eq!(rna("AUGGCCAU").translate(&table).unwrap().as_bytes(), b"MA");
    }

    #[test]
    fn translate_too_short() {
        let table = codon_table(1).unwrap();
        assert!(matches!(
            rna("AU").translate(&table),
            Err(BioError::TooShort { len: 2 })
        ));
        assert!(rna("").translate(&table).is_err());
    }

    #[test]
    fn translate_follows_table() {
        let mito = codon_table(2).unwrap();
        assert_eq!(rna("AUGUGA").translate(&mito).unwrap().as_bytes(), b"MW");
    }

    #[test]
    fn translate_resolves_ambiguity() {
        let table = codon_table(1).unwrap();
        assert_eq!(rna("CUYAAMURA").translate(&table).unwrap().as_bytes(), b"LX*");
    }

    #[test]
    fn gc_content_basic() {
        assert_eq!(rna("AUAU").gc_content(), 0.0);
        assert_eq!(rna("GCGC").gc_content(), 1.0);
        assert_eq!(rna("AUGC").gc_content(), 0.5);
    }
}
