//! Canonical NCBI genetic codes.
//!
//! Each code is stored the way NCBI's `gc.prt` spells it: one amino acid
//! (`ncbieaa`) and one start/stop flag (`sncbieaa`) per codon, with the codons
//! enumerated in `TCAG` order for the first, second and third base. The
//! tables are expanded once, on first use, and never change afterwards.

use crate::codon::{Codon, CodonTable};
use crate::error::{BioError, BioResult};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

struct NcbiCode {
    id: u32,
    name: &'static str,
    description: &'static str,
    ncbieaa: &'static [u8; 64],
    sncbieaa: &'static [u8; 64],
}

// `gc.prt` writes the bases with T; the tables are keyed by U.
const BASES: &[u8; 4] = b"UCAG";

#[inline]
fn codon_at(index: usize) -> Codon {
    [BASES[index / 16], BASES[(index / 4) % 4], BASES[index % 4]]
}

impl NcbiCode {
    fn expand(&self) -> CodonTable {
        let mut codons = BTreeMap::new();
        let mut start_codons = BTreeSet::new();
        let mut stop_codons = BTreeSet::new();

        for (index, (&aa, &flag)) in self.ncbieaa.iter().zip(self.sncbieaa.iter()).enumerate() {
            let codon = codon_at(index);
            codons.insert(codon, aa);
            match flag {
                b'M' => {
                    start_codons.insert(codon);
                }
                b'*' => {
                    stop_codons.insert(codon);
                }
                _ => {}
            }
        }

        CodonTable {
            id: self.id,
            name: self.name.into(),
            description: self.description.into(),
            codons,
            start_codons,
            stop_codons,
        }
    }
}

static REGISTRY: LazyLock<Vec<CodonTable>> = LazyLock::new(|| {
    debug!("expanding {} NCBI genetic codes", NCBI_CODES.len());
    NCBI_CODES.iter().map(NcbiCode::expand).collect()
});

/// Owned copy of the genetic code numbered `id` in NCBI's registry.
///
/// Edits made to the returned table never reach the registry or any other
/// copy handed out by this function.
pub fn codon_table(id: u32) -> BioResult<CodonTable> {
    REGISTRY
        .iter()
        .find(|table| table.id == id)
        .cloned()
        .ok_or(BioError::UnknownTable { id })
}

/// Owned copies of every registered genetic code, ordered by id.
pub fn codon_tables() -> Vec<CodonTable> {
    REGISTRY.clone()
}

const NCBI_CODES: &[NcbiCode] = &[
    NcbiCode {
        id: 1,
        name: "Standard",
        description: "SGC0",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**--*----M---------------M----------------------------",
    },
    NcbiCode {
        id: 2,
        name: "Vertebrate Mitochondrial",
        description: "SGC1",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
        sncbieaa: b"----------**--------------------MMMM----------**---M------------",
    },
    NcbiCode {
        id: 3,
        name: "Yeast Mitochondrial",
        description: "SGC2",
        ncbieaa: b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**----------------------MM---------------M------------",
    },
    NcbiCode {
        id: 4,
        name: "Mold Mitochondrial; Protozoan Mitochondrial; Coelenterate Mitochondrial; Mycoplasma; Spiroplasma",
        description: "SGC3",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--MM------**-------M------------MMMM---------------M------------",
    },
    NcbiCode {
        id: 5,
        name: "Invertebrate Mitochondrial",
        description: "SGC4",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**--------------------MMMM---------------M------------",
    },
    NcbiCode {
        id: 6,
        name: "Ciliate Nuclear; Dasycladacean Nuclear; Hexamita Nuclear",
        description: "SGC5",
        ncbieaa: b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--------------*--------------------M----------------------------",
    },
    NcbiCode {
        id: 9,
        name: "Echinoderm Mitochondrial; Flatworm Mitochondrial",
        description: "SGC8",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**-----------------------M---------------M------------",
    },
    NcbiCode {
        id: 10,
        name: "Euplotid Nuclear",
        description: "SGC9",
        ncbieaa: b"FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**-----------------------M----------------------------",
    },
    NcbiCode {
        id: 11,
        name: "Bacterial, Archaeal and Plant Plastid",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**--*----M------------MMMM---------------M------------",
    },
    NcbiCode {
        id: 12,
        name: "Alternative Yeast Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**--*----M---------------M----------------------------",
    },
    NcbiCode {
        id: 13,
        name: "Ascidian Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**----------------------MM---------------M------------",
    },
    NcbiCode {
        id: 14,
        name: "Alternative Flatworm Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        sncbieaa: b"-----------*-----------------------M----------------------------",
    },
    NcbiCode {
        id: 15,
        name: "Blepharisma Macronuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------*---*--------------------M----------------------------",
    },
    NcbiCode {
        id: 16,
        name: "Chlorophycean Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------*---*--------------------M----------------------------",
    },
    NcbiCode {
        id: 21,
        name: "Trematode Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**-----------------------M---------------M------------",
    },
    NcbiCode {
        id: 22,
        name: "Scenedesmus obliquus Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"------*---*---*--------------------M----------------------------",
    },
    NcbiCode {
        id: 23,
        name: "Thraustochytrium Mitochondrial",
        description: "",
        ncbieaa: b"FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--*-------**--*-----------------M--M---------------M------------",
    },
    NcbiCode {
        id: 24,
        name: "Rhabdopleuridae Mitochondrial",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**-------M---------------M---------------M------------",
    },
    NcbiCode {
        id: 25,
        name: "Candidate Division SR1 and Gracilibacteria",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------**-----------------------M---------------M------------",
    },
    NcbiCode {
        id: 26,
        name: "Pachysolen tannophilus Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**--*----M---------------M----------------------------",
    },
    NcbiCode {
        id: 27,
        name: "Karyorelict Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--------------*--------------------M----------------------------",
    },
    NcbiCode {
        id: 28,
        name: "Condylostoma Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**--*--------------------M----------------------------",
    },
    NcbiCode {
        id: 29,
        name: "Mesodinium Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--------------*--------------------M----------------------------",
    },
    NcbiCode {
        id: 30,
        name: "Peritrich Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"--------------*--------------------M----------------------------",
    },
    NcbiCode {
        id: 31,
        name: "Blastocrithidia Nuclear",
        description: "",
        ncbieaa: b"FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"----------**-----------------------M----------------------------",
    },
    NcbiCode {
        id: 32,
        name: "Balanophoraceae Plastid",
        description: "",
        ncbieaa: b"FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        sncbieaa: b"---M------*---*----M------------MMMM---------------M------------",
    },
    NcbiCode {
        id: 33,
        name: "Cephalodiscidae Mitochondrial UAA-Tyr",
        description: "",
        ncbieaa: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        sncbieaa: b"---M-------*-------M---------------M---------------M------------",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_covers_all_codons() {
        for table in codon_tables() {
            assert_eq!(table.codons().len(), 64, "table {}", table.id());
            assert!(table.codons().keys().all(|codon| !codon.contains(&b'T')));
            assert!(table.start_codons().iter().all(|c| table.codons().contains_key(c)));
            assert!(table.stop_codons().iter().all(|c| table.codons().contains_key(c)));
        }
    }

    #[test]
    fn tables_are_ordered_by_id() {
        let ids: Vec<u32> = codon_tables().iter().map(CodonTable::id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn standard_code() {
        let table = codon_table(1).unwrap();
        assert_eq!(table.name(), "Standard");
        assert_eq!(table.get(b"UUU"), Some(b'F'));
        assert_eq!(table.get(b"UGG"), Some(b'W'));
        assert!(table.is_start(b"AUG"));
        assert!(table.is_start(b"UUG"));
        assert!(!table.is_start(b"GUG"));
        let stops: Vec<&Codon> = table.stop_codons().iter().collect();
        assert_eq!(stops, [b"UAA", b"UAG", b"UGA"]);
    }

    #[test]
    fn vertebrate_mitochondrial_code() {
        let table = codon_table(2).unwrap();
        assert_eq!(table.get(b"UGA"), Some(b'W'));
        assert_eq!(table.get(b"AGA"), Some(b'*'));
        assert!(table.is_stop(b"AGG"));
        assert!(!table.is_stop(b"UGA"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(matches!(codon_table(7), Err(BioError::UnknownTable { id: 7 })));
        assert!(matches!(codon_table(999), Err(BioError::UnknownTable { id: 999 })));
    }

    #[test]
    fn retrieved_tables_are_independent() {
        let mut edited = codon_table(1).unwrap();
        edited.modify_codon_usage([("AAA", b'T')]).unwrap();
        assert_eq!(edited.get(b"AAA"), Some(b'T'));

        let fresh = codon_table(1).unwrap();
        assert_eq!(fresh.get(b"AAA"), Some(b'K'));
        assert_ne!(edited, fresh);
    }
}
