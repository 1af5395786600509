use crate::alphabets::ambiguity::amino_acid_variants;
use crate::alphabets::protein::STOP;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
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

    pub fn has_ambiguous(&self) -> bool {
        self.bytes.iter().any(|&b| amino_acid_variants(b).is_some())
    }

    pub fn ambiguous_positions(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for (i, &b) in self.bytes.iter().enumerate() {
            if amino_acid_variants(b).is_some() {
                out.push(i);
            }
        }
        out
    }

    pub fn stop_count(&self) -> usize {
        memchr::memchr_iter(STOP, &self.bytes).count()
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::codon_table;
    use crate::seq::rna::RnaSeq;

    fn translated(rna: &str) -> ProteinSeq {
        RnaSeq::new(rna.as_bytes().to_vec())
            .unwrap()
            .translate(&codon_table(1).unwrap())
            .unwrap()
    }

    #[test]
    fn ambiguity_positions() {
        // AUG NNN CCC AAY UAA -> M X P N *
        let p = translated("AUGNNNCCCAAYUAA");
        assert_eq!(p.as_bytes(), b"MXPN*");
        assert!(p.has_ambiguous());
        assert_eq!(p.ambiguous_positions(), vec![1]);
        assert_eq!(p.stop_count(), 1);
        assert!(!translated("AUGCCCUAA").has_ambiguous());
    }

    #[test]
    fn stop_count_over_several_stops() {
        assert_eq!(translated("UAAUGAUAG").stop_count(), 3);
        assert_eq!(translated("AUG").stop_count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(translated("AUGCCCUAA").to_string(), "MP*");
    }
}
