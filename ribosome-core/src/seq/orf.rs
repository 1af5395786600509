use crate::codon::CodonTable;
use crate::error::BioResult;
use crate::seq::protein::ProteinSeq;
use crate::seq::rna::{translate_bytes, RnaSeq};

/// An open reading frame found in an RNA sequence.
///
/// `start` and `end` are 0-based offsets into the source sequence, with `end`
/// exclusive and covering the stop codon. `frame` is 1, 2 or 3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub codons: usize,
    pub frame: u8,
    pub protein: ProteinSeq,
}

impl RnaSeq {
    /// Every start-to-stop span of at least `min_codons` codons, stop codon
    /// included, in all three forward frames.
    ///
    /// Results are grouped by frame (1, 2, 3) and ordered by start within a
    /// frame. After a start codon is resolved the scan continues with the
    /// codon right after it, so a later start codon inside an ORF opens its
    /// own, overlapping ORF. A start codon with no in-frame stop yields
    /// nothing.
    pub fn find_orfs(&self, min_codons: usize, table: &CodonTable) -> BioResult<Vec<Orf>> {
        let min_codons = min_codons.max(1);
        let seq = self.as_bytes();
        let mut orfs = Vec::new();

        if seq.len() < 3 {
            return Ok(orfs);
        }
        let last_codon = seq.len() - 3;

        for frame in 0..3 {
            for start in (frame..=last_codon).step_by(3) {
                if !table.is_start(&seq[start..start + 3]) {
                    continue;
                }

                let stop = (start + 3..=last_codon)
                    .step_by(3)
                    .find(|&pos| table.is_stop(&seq[pos..pos + 3]));
                let Some(stop) = stop else {
                    continue;
                };

                let end = stop + 3;
                let codons = (end - start) / 3;
                if codons < min_codons {
                    continue;
                }

                orfs.push(Orf {
                    start,
                    end,
                    codons,
                    frame: frame as u8 + 1,
                    protein: translate_bytes(&seq[start..end], table)?,
                });
            }
        }

        Ok(orfs)
    }
}
