pub mod registry;

pub use registry::{codon_table, codon_tables};

use crate::alphabets::ambiguity::expand_nucleotide;
use crate::alphabets::protein::UNKNOWN;
use crate::alphabets::{codon_alphabet, protein};
use crate::error::{BioError, BioResult};
use std::collections::{BTreeMap, BTreeSet};

/// Unambiguous RNA triplet, uppercase, written with `U`.
pub type Codon = [u8; 3];

/// A genetic code: codon assignments plus the codons that open and close a
/// reading frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonTable {
    id: u32,
    name: Box<str>,
    description: Box<str>,
    codons: BTreeMap<Codon, u8>,
    start_codons: BTreeSet<Codon>,
    stop_codons: BTreeSet<Codon>,
}

impl CodonTable {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn codons(&self) -> &BTreeMap<Codon, u8> {
        &self.codons
    }

    pub fn start_codons(&self) -> &BTreeSet<Codon> {
        &self.start_codons
    }

    pub fn stop_codons(&self) -> &BTreeSet<Codon> {
        &self.stop_codons
    }

    /// Amino acid assigned to an exact, unambiguous codon.
    pub fn get(&self, codon: &[u8]) -> Option<u8> {
        let codon = Codon::try_from(codon).ok()?;
        self.codons.get(&codon).copied()
    }

    #[inline]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        Codon::try_from(codon).is_ok_and(|c| self.start_codons.contains(&c))
    }

    #[inline]
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        Codon::try_from(codon).is_ok_and(|c| self.stop_codons.contains(&c))
    }

    /// Translate a single codon, resolving IUPAC ambiguity codes.
    ///
    /// Every concrete triplet the codon can stand for is looked up. If they
    /// all agree the shared amino acid is returned; if any is missing from
    /// the table or they disagree, the result is `X`. Input that is not
    /// three symbols long also yields `X`.
    pub fn translate_codon(&self, codon: impl AsRef<[u8]>) -> u8 {
        let [a, b, c] = match codon.as_ref() {
            &[a, b, c] => [
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ],
            _ => return UNKNOWN,
        };

        let mut resolved = None;
        for &first in expand_nucleotide(&a) {
            for &second in expand_nucleotide(&b) {
                for &third in expand_nucleotide(&c) {
                    match self.codons.get(&[first, second, third]) {
                        Some(&aa) if resolved.is_none_or(|seen| seen == aa) => {
                            resolved = Some(aa);
                        }
                        _ => return UNKNOWN,
                    }
                }
            }
        }

        resolved.unwrap_or(UNKNOWN)
    }

    /// Reassign codons to new amino acids.
    ///
    /// All edits are validated before any of them is applied: a codon must be
    /// exactly three nucleotide symbols (ambiguity codes allowed, gaps not) and
    /// the amino acid must be a known symbol. On error the table is unchanged.
    ///
    /// Codons are stored in RNA form, so `T` is written as `U`, and an
    /// ambiguous codon assigns every concrete triplet it stands for.
    ///
    /// Edits leave the start and stop codon sets alone: a stop codon that is
    /// reassigned still ends ORFs but translates to its new amino acid.
    pub fn modify_codon_usage<I, C>(&mut self, edits: I) -> BioResult<()>
    where
        I: IntoIterator<Item = (C, u8)>,
        C: AsRef<[u8]>,
    {
        let nucleotides = codon_alphabet();
        let amino_acids = protein::iupac_alphabet();

        let mut staged: Vec<(Codon, u8)> = Vec::new();
        for (codon, amino_acid) in edits {
            let codon = codon.as_ref();
            let amino_acid = amino_acid.to_ascii_uppercase();
            let invalid = |reason| BioError::Validation {
                codon: String::from_utf8_lossy(codon).into_owned(),
                amino_acid: amino_acid as char,
                reason,
            };

            let codon: Codon = codon
                .try_into()
                .map_err(|_| invalid("codon must be exactly 3 nucleotides"))?;
            let codon = codon.map(|b| match b.to_ascii_uppercase() {
                b'T' => b'U',
                upper => upper,
            });
            if !nucleotides.is_word(codon) {
                return Err(invalid("invalid nucleotide symbol"));
            }
            if !amino_acids.contains(amino_acid) {
                return Err(invalid("invalid amino acid symbol"));
            }

            for &first in expand_nucleotide(&codon[0]) {
                for &second in expand_nucleotide(&codon[1]) {
                    for &third in expand_nucleotide(&codon[2]) {
                        staged.push(([first, second, third], amino_acid));
                    }
                }
            }
        }

        self.codons.extend(staged);
        Ok(())
    }
}
