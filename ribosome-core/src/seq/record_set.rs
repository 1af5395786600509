use crate::codon::CodonTable;
use crate::error::{BioError, BioResult};
use crate::seq::dna::DnaSeq;
use crate::seq::orf::Orf;
use crate::seq::record::SeqRecord;
use crate::seq::rna::RnaSeq;
use crate::seq::MoleculeType;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ORFs per record, keyed by record id.
pub type OrfMap = HashMap<Box<str>, Vec<Orf>>;

/// Records that all hold the same kind of molecule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<SeqRecord>,
    molecule: MoleculeType,
}

impl RecordSet {
    pub fn dna(records: Vec<SeqRecord>) -> Self {
        Self {
            records,
            molecule: MoleculeType::Dna,
        }
    }

    pub fn rna(records: Vec<SeqRecord>) -> Self {
        Self {
            records,
            molecule: MoleculeType::Rna,
        }
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Transcribe every DNA record into mRNA. An RNA set is returned as is.
    pub fn transcribe(&self) -> BioResult<Self> {
        if self.molecule == MoleculeType::Rna {
            return Ok(self.clone());
        }

        let records: BioResult<Vec<SeqRecord>> =
            par_try_map!(self.records, |record: &SeqRecord| -> BioResult<SeqRecord> {
                let dna = DnaSeq::new(record.seq.as_bytes().to_vec()).map_err(|err| {
                    BioError::BatchAbort {
                        id: record.id.clone(),
                        source: Box::new(err),
                    }
                })?;
                Ok(record.with_seq(dna.transcribe().to_string()))
            });

        Ok(Self::rna(records?))
    }

    /// Find ORFs in every record concurrently.
    ///
    /// Only RNA sets are accepted; DNA has to be transcribed explicitly
    /// first. One task runs per record. The first task to fail records its
    /// error and flags the batch as cancelled: tasks that have not started
    /// yet are skipped, tasks already running finish normally. The call
    /// returns once every task is done, with either one entry per record or
    /// the first error alone.
    pub fn find_orfs(&self, min_codons: usize, table: &CodonTable) -> BioResult<OrfMap> {
        if self.molecule != MoleculeType::Rna {
            return Err(BioError::NotTranscribed);
        }

        debug!(
            "searching {} records for ORFs of at least {} codons (table {})",
            self.len(),
            min_codons,
            table.id()
        );

        let mapped: Mutex<OrfMap> = Mutex::new(HashMap::with_capacity(self.len()));
        let first_error: Mutex<Option<BioError>> = Mutex::new(None);
        let cancelled = AtomicBool::new(false);

        par_for_each!(self.records, |record: &SeqRecord| {
            if cancelled.load(Ordering::Acquire) {
                trace!("skipping record '{}': batch cancelled", record.id);
                return;
            }

            match record_orfs(record, min_codons, table) {
                Ok(orfs) => {
                    lock(&mapped).insert(record.id.clone(), orfs);
                }
                Err(err) => {
                    let mut slot = lock(&first_error);
                    if slot.is_none() {
                        *slot = Some(BioError::BatchAbort {
                            id: record.id.clone(),
                            source: Box::new(err),
                        });
                    }
                    cancelled.store(true, Ordering::Release);
                }
            }
        });

        if let Some(err) = into_inner(first_error) {
            warn!("ORF search aborted: {err}");
            return Err(err);
        }

        let mapped = into_inner(mapped);
        debug!("found ORFs for {} records", mapped.len());
        Ok(mapped)
    }
}

fn record_orfs(record: &SeqRecord, min_codons: usize, table: &CodonTable) -> BioResult<Vec<Orf>> {
    let rna = RnaSeq::new(record.seq.as_bytes().to_vec())?;
    rna.find_orfs(min_codons, table)
}

// Nothing panics while these locks are held, so a poisoned guard still
// carries consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn into_inner<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::codon_table;

    #[test]
    fn dna_set_is_rejected() {
        let table = codon_table(1).unwrap();
        let set = RecordSet::dna(vec![SeqRecord::new("Seq1", "ATGCCCTAA")]);
        assert!(matches!(
            set.find_orfs(1, &table),
            Err(BioError::NotTranscribed)
        ));
    }

    #[test]
    fn transcribe_converts_records() {
        let set = RecordSet::dna(vec![
            SeqRecord::new("Seq1", "TACGGGATT").with_desc("template"),
            SeqRecord::new("Seq2", "tac"),
        ]);
        let rna = set.transcribe().unwrap();
        assert_eq!(rna.molecule(), MoleculeType::Rna);
        assert_eq!(rna.records()[0].seq(), "AUGCCCUAA");
        assert_eq!(rna.records()[0].desc(), Some("template"));
        assert_eq!(rna.records()[1].seq(), "AUG");
    }

    #[test]
    fn transcribe_keeps_annotations() {
        let mut record = SeqRecord::new("Seq1", "TAC");
        record
            .annotations
            .insert("source".into(), vec!["chr1".into()]);
        let rna = RecordSet::dna(vec![record]).transcribe().unwrap();
        assert_eq!(rna.records()[0].annotations["source"], vec![Box::<str>::from("chr1")]);
    }

    #[test]
    fn transcribe_reports_offending_record() {
        let set = RecordSet::dna(vec![
            SeqRecord::new("Seq1", "TACGGGATT"),
            SeqRecord::new("Seq2", "UAC"),
        ]);
        match set.transcribe() {
            Err(BioError::BatchAbort { id, .. }) => assert_eq!(&*id, "Seq2"),
            other => panic!("expected BatchAbort, got {other:?}"),
        }
    }

    #[test]
    fn transcribe_keeps_rna_set() {
        let set = RecordSet::rna(vec![SeqRecord::new("Seq1", "AUG")]);
        assert_eq!(set.transcribe().unwrap(), set);
    }

    #[test]
    fn empty_set_yields_empty_map() {
        let table = codon_table(1).unwrap();
        assert!(RecordSet::rna(Vec::new())
            .find_orfs(1, &table)
            .unwrap()
            .is_empty());
    }
}
