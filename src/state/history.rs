//! History page state: the record list, selection, and delete tracking.
//!
//! DESIGN
//! ======
//! All transitions are plain methods on a plain struct so the selection and
//! delete invariants are testable without a DOM. The page stores one
//! `RwSignal<HistoryState>` and calls these inside `update`.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::BTreeSet;

use crate::net::types::DetectionRecord;

/// State for the history page.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    /// Records as last loaded from the server, newest-first server order.
    pub records: Vec<DetectionRecord>,
    /// The record whose detail report is shown, if any.
    pub selected: Option<DetectionRecord>,
    /// Ids with a delete in flight; blocks duplicate deletes of the same
    /// record while other records remain deletable.
    pub deleting: BTreeSet<i64>,
    /// True while the list itself is being (re)loaded.
    pub loading: bool,
}

impl HistoryState {
    /// Replace the record list after a (re)load.
    ///
    /// Keeps the current selection when that record still exists (refreshed
    /// to the server's copy), otherwise falls back to the first record.
    pub fn apply_loaded(&mut self, records: Vec<DetectionRecord>) {
        self.loading = false;
        self.selected = match self.selected.take() {
            Some(previous) => records
                .iter()
                .find(|record| record.id == previous.id)
                .or_else(|| records.first())
                .cloned(),
            None => records.first().cloned(),
        };
        self.records = records;
    }

    /// Show a record's detail report (possibly a fresher copy than the list
    /// row it was selected from).
    pub fn select(&mut self, record: DetectionRecord) {
        self.selected = Some(record);
    }

    /// Mark a delete as in flight. Returns `false` when this record already
    /// has one, in which case the caller must not issue another request.
    pub fn begin_delete(&mut self, id: i64) -> bool {
        self.deleting.insert(id)
    }

    /// Clear the in-flight marker, whether the delete succeeded or not.
    pub fn finish_delete(&mut self, id: i64) {
        self.deleting.remove(&id);
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    /// Remove exactly the record with `id` after a successful delete.
    ///
    /// If it was selected, selection moves to the new first record, or to
    /// none when the list became empty.
    pub fn remove_record(&mut self, id: i64) {
        self.records.retain(|record| record.id != id);
        if self.selected.as_ref().is_some_and(|selected| selected.id == id) {
            self.selected = self.records.first().cloned();
        }
    }
}
