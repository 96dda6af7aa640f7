use crate::model::{Record, RecordId};

/// An ordered, append-only sequence of records.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even if the sequence were ever shortened.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing records, keeping their order.
    ///
    /// The counter resumes after the highest id present.
    pub fn from_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// First record with the given id, by linear scan.
    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// All records matching `pred`, in insertion order.
    pub fn filter<P>(&self, mut pred: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Appends the record built for the next id and returns a copy of it.
    pub fn insert<F>(&mut self, build: F) -> T
    where
        F: FnOnce(RecordId) -> T,
    {
        let record = build(self.next_id);
        self.next_id = self.next_id.max(record.id()) + 1;
        self.records.push(record.clone());
        record
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    fn next_id(&self) -> RecordId {
        self.next_id
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
