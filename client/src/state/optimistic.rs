//! Snapshot/rollback helper for optimistic list updates.
//!
//! Only the touched entry is saved. Rolling back restores that entry by key
//! and leaves the rest of the list alone, so a reload that lands while the
//! request is in flight is kept.

#[cfg(test)]
#[path = "optimistic_test.rs"]
mod optimistic_test;

/// Saved copy of one list entry taken before an optimistic mutation.
#[derive(Clone, Debug)]
#[must_use = "a snapshot does nothing unless committed or rolled back"]
pub struct Snapshot<T, K> {
    key: K,
    key_of: fn(&T) -> K,
    saved: T,
}

impl<T: Clone, K: PartialEq> Snapshot<T, K> {
    /// Snapshot the entry of `list` keyed `key`, then apply `mutate` to it in
    /// place. Returns `None` when no entry has that key.
    pub fn apply(list: &mut [T], key: K, key_of: fn(&T) -> K, mutate: impl FnOnce(&mut T)) -> Option<Self> {
        let entry = list.iter_mut().find(|item| key_of(item) == key)?;
        let saved = entry.clone();
        mutate(entry);
        Some(Self { key, key_of, saved })
    }

    /// Put the saved entry back. A no-op when the entry is gone.
    pub fn rollback(self, list: &mut [T]) {
        if let Some(entry) = list.iter_mut().find(|item| (self.key_of)(item) == self.key) {
            *entry = self.saved;
        }
    }

    /// Keep the mutated value.
    pub fn commit(self) {}

    /// Settle on the outcome of the request that followed the mutation.
    pub fn settle<R, E>(self, list: &mut [T], outcome: &Result<R, E>) {
        if outcome.is_err() {
            self.rollback(list);
        }
    }
}
