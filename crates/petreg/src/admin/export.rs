//! CSV export of the filtered record view.
//!
//! The output is UTF-8 with a byte-order-mark prefix so spreadsheet
//! applications pick up the encoding. Every field is double-quoted, and
//! literal commas inside the free-text fields are replaced by semicolons
//! to keep the 13 columns intact.

use chrono::NaiveDate;

use crate::record::{short_id, PetRecord};

/// Byte-order mark prefixed to the exported content.
const BOM: char = '\u{feff}';

/// The fixed export columns, in order.
pub const CSV_HEADERS: [&str; 13] = [
    "ID",
    "Status",
    "Name",
    "Species",
    "Gender",
    "Breed",
    "Size",
    "Color",
    "Description",
    "Address",
    "Occurrence_Date",
    "Phone",
    "Registered_At",
];

/// Render records as CSV: a header row, then one row per record.
#[must_use]
pub fn to_csv(records: &[PetRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(quote_row(CSV_HEADERS.iter().map(ToString::to_string)));
    rows.extend(records.iter().map(record_row));
    format!("{BOM}{}", rows.join("\n"))
}

/// One CSV row for a record. The visible identifier is the short id.
fn record_row(record: &PetRecord) -> String {
    quote_row(
        [
            short_id(&record.id).to_string(),
            record.status.to_string(),
            record.name.clone(),
            record.species.clone(),
            record.gender.clone(),
            record.breed.clone(),
            record.size.to_string(),
            record.color.clone(),
            record.description.replace(',', ";"),
            record.address.replace(',', ";"),
            record.occurrence_date.clone(),
            record.phone.clone(),
            record.registered_at.clone(),
        ]
        .into_iter(),
    )
}

/// Join fields into one row, double-quoting each.
fn quote_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{field}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Export file name for the given date: `pets_database_YYYY-MM-DD.csv`.
#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("pets_database_{}.csv", date.format("%Y-%m-%d"))
}
