use super::DomainName;
use serde::{Deserialize, Serialize};
use std::fmt;

const ISSUER_CRITICAL_FLAG: u8 = 0b1000_0000;

/// A single CAA resource record (RFC 8659): flags, property tag and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaRecord {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

impl CaaRecord {
    pub fn new(flags: u8, tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            flags,
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn issue(value: impl Into<String>) -> Self {
        Self::new(0, "issue", value)
    }

    pub fn issuer_critical(&self) -> bool {
        self.flags & ISSUER_CRITICAL_FLAG == ISSUER_CRITICAL_FLAG
    }
}

impl fmt::Display for CaaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.flags, self.tag, self.value)
    }
}

/// The CAA records found at one owner name. An empty set means no CAA
/// policy applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaaRecordSet {
    owner: Option<DomainName>,
    records: Vec<CaaRecord>,
}

impl CaaRecordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn found(owner: DomainName, records: Vec<CaaRecord>) -> Self {
        Self {
            owner: Some(owner),
            records,
        }
    }

    /// Name the records were published at, `None` when the set is empty.
    pub fn owner(&self) -> Option<&DomainName> {
        if self.records.is_empty() {
            None
        } else {
            self.owner.as_ref()
        }
    }

    pub fn records(&self) -> &[CaaRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CaaRecord> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaaRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a CaaRecordSet {
    type Item = &'a CaaRecord;
    type IntoIter = std::slice::Iter<'a, CaaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
