use log::debug;
use shared::Identified;

use super::traits::CollectionStorage;

/// Collection held in a `Vec`, index 0 being the newest record
#[derive(Debug, Clone)]
pub struct InMemoryCollection<T> {
    name: &'static str,
    records: Vec<T>,
}

impl<T> InMemoryCollection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Vec::new(),
        }
    }

    /// Build a collection from records already ordered newest-first
    pub fn with_records(name: &'static str, records: Vec<T>) -> Self {
        Self { name, records }
    }
}

impl<T: Identified> CollectionStorage<T> for InMemoryCollection<T> {
    fn prepend(&mut self, record: T) {
        debug!("Prepending record {} to {}", record.id(), self.name);
        self.records.insert(0, record);
    }

    fn all(&self) -> &[T] {
        &self.records
    }
}

/// Hands out increasing identifiers, never repeating within a session.
///
/// Once `u64::MAX` has been handed out (or is already taken) the generator
/// is exhausted and returns `None`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: Option<u64>,
}

impl SequentialIdGenerator {
    /// Start above an identifier that is already taken
    pub fn starting_after(highest_taken: u64) -> Self {
        Self {
            next: highest_taken.checked_add(1),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    pub fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}
