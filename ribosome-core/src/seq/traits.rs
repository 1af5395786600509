use memchr::memchr2_iter;

pub trait SeqBytes {
    fn as_bytes(&self) -> &[u8];

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

pub trait ReverseComplement {
    fn reverse_complement(&self) -> Self;
}

/// Shared behaviour of DNA and RNA.
pub trait NucleotideSeq: SeqBytes + ReverseComplement {
    /// Fraction of G and C symbols; an empty sequence has no GC.
    fn gc_content(&self) -> f64 {
        let bytes = self.as_bytes();
        if bytes.is_empty() {
            return 0.0;
        }
        let gc = memchr2_iter(b'G', b'C', bytes).count();
        gc as f64 / bytes.len() as f64
    }
}
