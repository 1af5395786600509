pub mod dna;
pub mod orf;
pub mod protein;
pub mod record;
pub mod record_set;
pub mod rna;
pub mod traits;


pub use orf::Orf;
pub use record::{Annotations, SeqRecord};
pub use record_set::{OrfMap, RecordSet};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoleculeType {
    Dna,
    Rna,
}

impl fmt::Display for MoleculeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoleculeType::Dna => f.write_str("DNA"),
            MoleculeType::Rna => f.write_str("RNA"),
        }
    }
}
