//! Guided three-section intake flow.
//!
//! [`FormSession`] owns the raw field values and the active section, and
//! enforces the validation rules for moving forward. Backward navigation
//! is never blocked. Finalizing re-validates everything, builds the
//! record, and hands it to the store.

use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};
use crate::record::{digit_count, or_not_informed, PetRecordInput, Size, Status, MIN_PHONE_DIGITS};
use crate::store::RecordStore;
use crate::ui::{FormUi, Notice, NoticeHost, NoticeKind, RESET_PROMPT_DELAY};

/// Error shown when the first section's required fields are missing.
const ERR_BASICS: &str = "Please fill in all required fields: Status, Species and Gender.";

/// Error shown when the size has not been selected.
const ERR_SIZE: &str = "Please select the animal size.";

/// Error shown when the phone or the occurrence date is missing.
const ERR_CONTACT: &str = "Please fill in the phone and the date.";

/// Error shown when the phone has too few digits.
const ERR_PHONE: &str = "Please enter a valid phone with at least 10 digits.";

/// Error shown when persisting the record failed.
const ERR_SAVE: &str = "Failed to save the record. Please try again.";

/// Prompt offered after a successful registration.
const RESET_PROMPT: &str = "Clear the form to register another pet?";

/// The three form sections, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Status, species, gender and name.
    #[default]
    Basics,
    /// Size, breed and color.
    Appearance,
    /// Phone, occurrence date, description and address.
    Contact,
}

impl Section {
    /// 1-based section number.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Appearance => 2,
            Self::Contact => 3,
        }
    }

    /// The section after this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Appearance),
            Self::Appearance => Some(Self::Contact),
            Self::Contact => None,
        }
    }

    /// The section before this one, if any.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::Appearance => Some(Self::Basics),
            Self::Contact => Some(Self::Appearance),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basics => write!(f, "Basic information"),
            Self::Appearance => write!(f, "Physical characteristics"),
            Self::Contact => write!(f, "Contact and details"),
        }
    }
}

/// Raw field values as entered by the reporter.
///
/// Everything is a string at this stage; enums are parsed and sentinels
/// applied only when the record is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// "lost" or "found".
    pub status: String,
    /// Animal species.
    pub species: String,
    /// Animal gender.
    pub gender: String,
    /// Breed (optional).
    pub breed: String,
    /// "small", "medium" or "large".
    pub size: String,
    /// Coat color (optional).
    pub color: String,
    /// The pet's name (optional).
    pub name: String,
    /// Free-text description (optional).
    pub description: String,
    /// Address of the occurrence (optional).
    pub address: String,
    /// Occurrence date, `YYYY-MM-DD`.
    pub occurrence_date: String,
    /// Contact phone.
    pub phone: String,
}

/// The intake flow state machine.
#[derive(Debug, Default)]
pub struct FormSession {
    fields: FormFields,
    section: Section,
}

impl FormSession {
    /// Start a fresh session at the first section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Read access to the field values.
    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Write access to the field values (the host fills these in).
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Validate the active section and move to the next one.
    ///
    /// On validation failure an error notice is shown and the session
    /// stays where it is. On success any visible error is dismissed and
    /// the next section becomes active; at the last section the call is
    /// a no-op beyond validation. Returns whether validation passed.
    pub fn advance(&mut self, ui: &mut dyn NoticeHost) -> bool {
        let current = self.section();
        if let Err(message) = self.validate_section(current) {
            ui.show(Notice::error(message));
            return false;
        }

        ui.dismiss(NoticeKind::Error);
        if let Some(next) = current.next() {
            self.section = next;
        }
        true
    }

    /// Move back to the previous section.
    ///
    /// Never blocked and never validated; a no-op at the first section.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.section.prev() {
            self.section = prev;
        }
    }

    /// Section-specific validation.
    ///
    /// The contact section checks presence first; the digit-count check
    /// runs only when both fields are non-empty.
    fn validate_section(&self, section: Section) -> std::result::Result<(), &'static str> {
        match section {
            Section::Basics => {
                if self.fields.status.is_empty()
                    || self.fields.species.is_empty()
                    || self.fields.gender.is_empty()
                {
                    return Err(ERR_BASICS);
                }
            }
            Section::Appearance => {
                if self.fields.size.is_empty() {
                    return Err(ERR_SIZE);
                }
            }
            Section::Contact => {
                if self.fields.phone.is_empty() || self.fields.occurrence_date.is_empty() {
                    return Err(ERR_CONTACT);
                } else if digit_count(&self.fields.phone) < MIN_PHONE_DIGITS {
                    return Err(ERR_PHONE);
                }
            }
        }
        Ok(())
    }

    /// Required fields that are still empty, in form order.
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.fields.status.is_empty() {
            missing.push("Status");
        }
        if self.fields.species.is_empty() {
            missing.push("Species");
        }
        if self.fields.gender.is_empty() {
            missing.push("Gender");
        }
        if self.fields.size.is_empty() {
            missing.push("Size");
        }
        if self.fields.phone.is_empty() {
            missing.push("Phone");
        }
        if self.fields.occurrence_date.is_empty() {
            missing.push("Date");
        }
        missing
    }

    /// Parse the field values into a record input, applying the
    /// "not informed" sentinel to blank optional fields.
    fn build_input(&self) -> Result<PetRecordInput> {
        let status = Status::from_str(&self.fields.status)
            .map_err(|_| Error::validation("Please enter a valid status (lost or found)."))?;
        let size = Size::from_str(&self.fields.size)
            .map_err(|_| Error::validation("Please enter a valid size (small, medium or large)."))?;

        Ok(PetRecordInput {
            status,
            species: self.fields.species.clone(),
            gender: self.fields.gender.clone(),
            breed: or_not_informed(&self.fields.breed),
            size,
            color: or_not_informed(&self.fields.color),
            name: or_not_informed(&self.fields.name),
            description: or_not_informed(&self.fields.description),
            address: or_not_informed(&self.fields.address),
            occurrence_date: self.fields.occurrence_date.clone(),
            phone: self.fields.phone.clone(),
        })
    }

    /// Validate everything, build the record, and append it to the store.
    ///
    /// Required fields are re-checked across all sections regardless of
    /// the active one; missing fields are reported jointly, in form
    /// order. On success a notice carrying the new id is shown and the
    /// user is offered a form reset after a fixed delay. On store
    /// failure a generic retry notice is shown.
    ///
    /// Returns the new record id, or `None` when nothing was saved (the
    /// reason was already reported through the notice host).
    pub fn finalize(&mut self, store: &RecordStore, ui: &mut dyn FormUi) -> Option<String> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            let message = format!(
                "The following fields are required: {}.",
                missing.join(", ")
            );
            ui.show(Notice::error(message));
            return None;
        }

        if digit_count(&self.fields.phone) < MIN_PHONE_DIGITS {
            ui.show(Notice::error(ERR_PHONE));
            return None;
        }

        let input = match self.build_input() {
            Ok(input) => input,
            Err(err) => {
                ui.show(Notice::error(err.to_string()));
                return None;
            }
        };

        match store.append(&input) {
            Ok(id) => {
                ui.dismiss(NoticeKind::Error);
                ui.show(Notice::success(format!(
                    "Pet registered successfully!\nRegistration ID: {id}\nThe record was saved to the local database."
                )));

                if ui.confirm_after(RESET_PROMPT_DELAY, RESET_PROMPT) {
                    self.reset(ui);
                }
                Some(id)
            }
            Err(err) => {
                warn!("Failed to append record: {err}");
                ui.show(Notice::error(ERR_SAVE));
                None
            }
        }
    }

    /// Clear all fields, return to the first section, and dismiss both
    /// notice kinds.
    pub fn reset(&mut self, ui: &mut dyn FormUi) {
        self.fields = FormFields::default();
        self.section = Section::Basics;
        ui.dismiss_all();
    }
}
