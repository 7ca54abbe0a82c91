//! Administrative console over the record set.
//!
//! [`AdminView`] owns an authoritative in-memory copy of the records, a
//! derived filtered view, and summary counts. It is constructed fresh
//! per admin session; nothing here is process-wide state.

pub mod export;

use tracing::debug;

use crate::error::Result;
use crate::record::{capitalize, format_occurrence_date, format_phone, PetRecord, Status};
use crate::store::RecordStore;
use crate::ui::ConfirmPrompt;

/// Summary counts over the authoritative record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total number of records.
    pub total: usize,
    /// Records with status lost.
    pub lost: usize,
    /// Records with status found.
    pub found: usize,
}

/// The read/filter/export/delete console over the full record set.
#[derive(Debug)]
pub struct AdminView {
    store: RecordStore,
    records: Vec<PetRecord>,
    filtered: Vec<PetRecord>,
    summary: Summary,
}

impl AdminView {
    /// Create a view over the given store. Call [`AdminView::load`]
    /// before reading from it.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            records: Vec::new(),
            filtered: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Fetch all records from the store.
    ///
    /// The authoritative set is replaced, the filtered view reset to an
    /// identical copy, and the summary counts recomputed.
    pub fn load(&mut self) {
        self.records = self.store.list_all();
        self.filtered = self.records.clone();
        self.summary = Summary {
            total: self.records.len(),
            lost: self
                .records
                .iter()
                .filter(|record| record.status == Status::Lost)
                .count(),
            found: self
                .records
                .iter()
                .filter(|record| record.status == Status::Found)
                .count(),
        };
        debug!("Loaded {} records", self.summary.total);
    }

    /// The authoritative record set, in append order.
    #[must_use]
    pub fn records(&self) -> &[PetRecord] {
        &self.records
    }

    /// The currently filtered view.
    #[must_use]
    pub fn filtered(&self) -> &[PetRecord] {
        &self.filtered
    }

    /// Summary counts over the authoritative set.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Recompute the filtered view.
    ///
    /// Each non-empty term is matched case-insensitively as a substring
    /// of the corresponding field; a record passes only when it matches
    /// every supplied term. Empty terms impose no constraint. The
    /// authoritative set and the summary are untouched.
    pub fn apply_filters(&mut self, status: &str, species: &str, name: &str) {
        let status = status.to_lowercase();
        let species = species.to_lowercase();
        let name = name.to_lowercase();

        self.filtered = self
            .records
            .iter()
            .filter(|pet| {
                let match_status =
                    status.is_empty() || pet.status.to_string().contains(&status);
                let match_species =
                    species.is_empty() || pet.species.to_lowercase().contains(&species);
                let match_name = name.is_empty() || pet.name.to_lowercase().contains(&name);
                match_status && match_species && match_name
            })
            .cloned()
            .collect();
    }

    /// Reset the filtered view to the full authoritative set.
    pub fn clear_filters(&mut self) {
        self.filtered = self.records.clone();
    }

    /// Delete a record after user confirmation.
    ///
    /// Looks the record up in the authoritative set, asks for
    /// confirmation naming the pet and its short id, deletes it from the
    /// store, and fully reloads. Returns `true` when a record was
    /// deleted; `false` when the id is unknown or the user declined.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rewrite fails.
    pub fn delete(&mut self, id: &str, ui: &mut dyn ConfirmPrompt) -> Result<bool> {
        let Some(record) = self.records.iter().find(|record| record.id == id) else {
            return Ok(false);
        };

        let prompt = format!(
            "Delete pet \"{}\" (ID: {})?",
            record.name,
            record.short_id()
        );
        if !ui.confirm(&prompt) {
            return Ok(false);
        }

        self.store.delete_by_id(id)?;
        self.load();
        Ok(true)
    }

    /// Export the *currently filtered* view as CSV.
    ///
    /// Returns `None` when the filtered view is empty; callers show a
    /// notice and produce no file.
    #[must_use]
    pub fn export_csv(&self) -> Option<String> {
        if self.filtered.is_empty() {
            return None;
        }
        Some(export::to_csv(&self.filtered))
    }

    /// Render the full detail of one record, or `None` for an unknown id.
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<String> {
        let pet = self.records.iter().find(|record| record.id == id)?;
        Some(format!(
            "ID: {}\n\
             Status: {}\n\
             Name: {}\n\
             Species: {}\n\
             Gender: {}\n\
             Breed: {}\n\
             Size: {}\n\
             Color: {}\n\
             Description: {}\n\
             Address: {}\n\
             Date: {}\n\
             Phone: {}\n\
             Registered at: {}",
            pet.id,
            pet.status.label(),
            pet.name,
            capitalize(&pet.species),
            capitalize(&pet.gender),
            pet.breed,
            pet.size.label(),
            pet.color,
            pet.description,
            pet.address,
            format_occurrence_date(&pet.occurrence_date),
            format_phone(&pet.phone),
            pet.registered_at,
        ))
    }
}
