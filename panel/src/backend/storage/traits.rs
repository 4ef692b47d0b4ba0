//! # Storage Traits
//!
//! Abstractions over where collection records live, so the entity store can
//! be backed by something other than memory without touching the domain.

use shared::Identified;

/// An append-only, newest-first collection of records
pub trait CollectionStorage<T: Identified> {
    /// Insert a record in front of every existing record
    fn prepend(&mut self, record: T);

    /// All records, most recently prepended first
    fn all(&self) -> &[T];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Highest identifier currently stored, if any
    fn max_id(&self) -> Option<u64> {
        self.all().iter().map(|record| record.id()).max()
    }
}
