use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use crate::seq::rna::RnaSeq;
use crate::seq::traits::{NucleotideSeq, ReverseComplement, SeqBytes};
use crate::seq::MoleculeType;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    /// Uppercases `bytes` and checks every symbol against the IUPAC DNA
    /// alphabet (gaps included). `U` is rejected.
    pub fn new(mut bytes: Vec<u8>) -> BioResult<Self> {
        bytes.make_ascii_uppercase();
        if let Some((pos, b)) = dna::iupac_alphabet().first_invalid(&bytes) {
            return Err(BioError::InvalidChar {
                ch: b as char,
                pos,
                molecule: MoleculeType::Dna,
            });
        }
        Ok(Self { bytes })
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
        let out = self.bytes.iter().map(|&base| dna::complement(base)).collect();
        Self { bytes: out }
    }

    pub fn reverse_complement(&self) -> Self {
        Self {
            bytes: dna::reverse_complement(self.as_bytes()),
        }
    }

    /// The mRNA that pairs with this strand when it is read as the template.
    pub fn transcribe(&self) -> RnaSeq {
        let out = self.bytes.iter().map(|&base| dna::transcribe(base)).collect();
        RnaSeq::from_bytes_unchecked(out)
    }
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        DnaSeq::as_bytes(self)
    }
}

impl ReverseComplement for DnaSeq {
    fn reverse_complement(&self) -> Self {
        DnaSeq::reverse_complement(self)
    }
}

impl NucleotideSeq for DnaSeq {}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
