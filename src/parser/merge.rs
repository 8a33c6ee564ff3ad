//! Overload merge: fold adjacent records that document the same name.
//!
//! Only the immediately preceding record is considered, so an overload
//! documented after some other function starts a new entry.

use crate::model::DocRecord;
use tracing::debug;

/// Ordered collection of records, in order of first appearance.
#[derive(Debug, Default)]
pub struct DocSet {
    records: Vec<DocRecord>,
}

impl DocSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly built record, merging it into the last entry when both
    /// document the same name.
    ///
    /// A merge appends the new signature and replaces params and references;
    /// the description and return text of the first overload are kept.
    pub fn absorb(&mut self, record: DocRecord) {
        match self.records.last_mut() {
            Some(last) if last.name == record.name => {
                debug!(name = %record.name, "merging overload");
                last.syntax.extend(record.syntax);
                last.params = record.params;
                last.references = record.references;
            }
            _ => {
                debug!(name = %record.name, "new record");
                self.records.push(record);
            }
        }
    }

    pub fn records(&self) -> &[DocRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
