//! Core record types for petreg.
//!
//! This module defines the fundamental data structures for representing
//! lost-and-found pet records, together with the small formatting helpers
//! shared by the intake flow, the admin console, and the CSV export.

use serde::{Deserialize, Serialize};

/// Sentinel value stored for optional fields the reporter left blank.
///
/// Display and export always show a value, never an empty string.
pub const NOT_INFORMED: &str = "not informed";

/// Minimum number of digits a phone number must contain.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Number of trailing id characters shown as the visible identifier.
const SHORT_ID_LEN: usize = 6;

/// Whether a pet was lost by its owner or found by the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The pet went missing and its owner is looking for it.
    Lost,
    /// The pet was found and the reporter is looking for its owner.
    Found,
}

impl Status {
    /// Capitalized label for tables and detail views.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lost => write!(f, "lost"),
            Self::Found => write!(f, "found"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// The animal's size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// Small animals (cats, small dog breeds).
    Small,
    /// Medium animals.
    Medium,
    /// Large animals.
    Large,
}

impl Size {
    /// Capitalized label for tables and detail views.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(format!("unknown size: {other}")),
        }
    }
}

/// A validated record as assembled by the intake flow, before the store
/// assigns its identity.
///
/// Optional fields already carry the [`NOT_INFORMED`] sentinel when the
/// reporter left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecordInput {
    /// Lost or found.
    pub status: Status,
    /// Animal species (free text, e.g. "dog").
    pub species: String,
    /// Animal gender (free text).
    pub gender: String,
    /// Breed, or the sentinel.
    pub breed: String,
    /// Size class.
    pub size: Size,
    /// Coat color, or the sentinel.
    pub color: String,
    /// The pet's name, or the sentinel.
    pub name: String,
    /// Free-text description, or the sentinel.
    pub description: String,
    /// Address where the pet was lost or found, or the sentinel.
    pub address: String,
    /// Date of the occurrence as entered (`YYYY-MM-DD`).
    pub occurrence_date: String,
    /// Contact phone as entered; its digit projection has at least
    /// [`MIN_PHONE_DIGITS`] digits, enforced by the intake flow.
    pub phone: String,
}

/// One lost/found-pet entry as persisted by the store.
///
/// Immutable once created; the only mutation is full deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Opaque unique identifier assigned at creation, never reassigned.
    /// Ids sort chronologically.
    pub id: String,
    /// Formatted creation timestamp (`DD/MM/YYYY HH:MM:SS`, local time).
    pub registered_at: String,
    /// Lost or found.
    pub status: Status,
    /// Animal species.
    pub species: String,
    /// Animal gender.
    pub gender: String,
    /// Breed, or the sentinel.
    pub breed: String,
    /// Size class.
    pub size: Size,
    /// Coat color, or the sentinel.
    pub color: String,
    /// The pet's name, or the sentinel.
    pub name: String,
    /// Free-text description, or the sentinel.
    pub description: String,
    /// Address of the occurrence, or the sentinel.
    pub address: String,
    /// Date of the occurrence (`YYYY-MM-DD`).
    pub occurrence_date: String,
    /// Contact phone as entered.
    pub phone: String,
}

impl PetRecord {
    /// Assemble a record from its input plus the identity assigned by the store.
    #[must_use]
    pub fn from_input(input: PetRecordInput, id: String, registered_at: String) -> Self {
        Self {
            id,
            registered_at,
            status: input.status,
            species: input.species,
            gender: input.gender,
            breed: input.breed,
            size: input.size,
            color: input.color,
            name: input.name,
            description: input.description,
            address: input.address,
            occurrence_date: input.occurrence_date,
            phone: input.phone,
        }
    }

    /// The visible identifier: the last 6 characters of the id.
    #[must_use]
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// Replace an empty field value with the [`NOT_INFORMED`] sentinel.
#[must_use]
pub fn or_not_informed(value: &str) -> String {
    if value.is_empty() {
        NOT_INFORMED.to_string()
    } else {
        value.to_string()
    }
}

/// The last 6 characters of an id, or the whole id when shorter.
#[must_use]
pub fn short_id(id: &str) -> &str {
    let chars = id.chars().count();
    if chars <= SHORT_ID_LEN {
        return id;
    }
    let (start, _) = id
        .char_indices()
        .nth(chars - SHORT_ID_LEN)
        .unwrap_or((0, ' '));
    &id[start..]
}

/// Count the decimal digits in a phone number, ignoring formatting
/// characters.
#[must_use]
pub fn digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// Format a phone number's digit projection for display.
///
/// Progressive formatting: 11+ digits become `(XX) XXXXX-XXXX` (extra
/// digits dropped), 7-10 keep a greedy five-digit middle group, 3-6
/// become `(XX) XXXX`, and shorter values pass through as their digits.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11.. => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => digits,
    }
}

/// Format an occurrence date (`YYYY-MM-DD`) as `DD/MM/YYYY` for display.
///
/// Empty values render as `N/A`; unparsable values pass through unchanged.
#[must_use]
pub fn format_occurrence_date(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |d| d.format("%d/%m/%Y").to_string())
}

/// Capitalize the first character of a free-text field for display.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
