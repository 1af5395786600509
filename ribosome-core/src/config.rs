use crate::codon::{codon_table, CodonTable};
#[cfg(feature = "parallel")]
use crate::error::BioError;
use crate::error::BioResult;
use crate::seq::{OrfMap, RecordSet};

/// Settings for a batch ORF search.
///
/// ```rust
/// use ribosome_core::config::OrfConfig;
///
/// let config = OrfConfig {
///     table_id: 11,
///     min_codons: 100,
///     ..Default::default()
/// };
/// assert_eq!(config.codon_table().unwrap().id(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfConfig {
    /// NCBI genetic code number.
    ///
    /// **Default**: `1` (Standard)
    pub table_id: u32,

    /// Shortest ORF to report, in codons, start and stop included. Values
    /// below 1 are treated as 1.
    ///
    /// **Default**: `1`
    pub min_codons: usize,

    /// Worker threads for the batch. `None` uses the global Rayon pool; a
    /// value builds a dedicated pool for each run. Ignored without the
    /// `parallel` feature.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            table_id: 1,
            min_codons: 1,
            num_threads: None,
        }
    }
}

impl OrfConfig {
    pub fn codon_table(&self) -> BioResult<CodonTable> {
        codon_table(self.table_id)
    }

    /// Run [`RecordSet::find_orfs`] with these settings.
    pub fn run(&self, records: &RecordSet) -> BioResult<OrfMap> {
        let table = self.codon_table()?;

        #[cfg(feature = "parallel")]
        {
            if let Some(num_threads) = self.num_threads {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| BioError::ThreadPool { msg: e.to_string() })?;
                return pool.install(|| records.find_orfs(self.min_codons, &table));
            }
        }

        records.find_orfs(self.min_codons, &table)
    }
}
