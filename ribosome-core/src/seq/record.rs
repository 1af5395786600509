use std::collections::HashMap;

pub type Annotations = HashMap<Box<str>, Vec<Box<str>>>;

/// A named sequence as handed over by a format reader. The sequence text is
/// kept raw; it is only validated when a typed sequence is built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: Box<str>,
    pub annotations: Annotations,
}

impl SeqRecord {
    pub fn new(id: impl Into<Box<str>>, seq: impl Into<Box<str>>) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq: seq.into(),
            annotations: Annotations::new(),
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Same record carrying a different sequence.
    pub fn with_seq(&self, seq: impl Into<Box<str>>) -> Self {
        Self {
            id: self.id.clone(),
            desc: self.desc.clone(),
            seq: seq.into(),
            annotations: self.annotations.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }
}
