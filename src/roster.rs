use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::document_processor::DocumentFormat;
use crate::errors::RosterError;

// @module: Student roster parsing from CSV and Excel files

/// Default password assigned when the roster omits the column
const DEFAULT_PASSWORD: &str = "123456";

/// Domain used to derive an email when the roster omits the column
const DEFAULT_EMAIL_DOMAIN: &str = "school.edu";

/// One student account parsed from a roster file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Login name - the only required column
    pub username: String,

    /// Initial password, defaulted when absent
    pub password: String,

    /// Email address, derived from the username when absent
    pub email: String,

    /// Display name, defaulted to the username when absent
    pub full_name: String,

    /// Account role - always `student` for roster imports
    pub role: String,
}

impl RosterEntry {
    fn from_columns(columns: &HashMap<String, String>) -> Option<Self> {
        let username = columns.get("username")?.trim().to_string();
        if username.is_empty() {
            return None;
        }

        let get_or = |key: &str, fallback: String| -> String {
            match columns.get(key) {
                Some(value) if !value.trim().is_empty() => value.trim().to_string(),
                _ => fallback,
            }
        };

        let password = get_or("password", DEFAULT_PASSWORD.to_string());
        let email = get_or("email", format!("{}@{}", username, DEFAULT_EMAIL_DOMAIN));
        let full_name = get_or("full_name", username.clone());

        Some(RosterEntry {
            username,
            password,
            email,
            full_name,
            role: "student".to_string(),
        })
    }
}

/// Parse a student roster from a CSV or Excel file.
///
/// Column names are matched case-insensitively after trimming. `username`
/// is required; `password`, `email` and `full_name` fall back to documented
/// defaults. Rows without a username are skipped with a warning.
pub fn parse_roster<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterError> {
    let path = path.as_ref();

    match DocumentFormat::from_extension(path) {
        DocumentFormat::Csv => parse_csv_roster(path),
        DocumentFormat::Excel => parse_excel_roster(path),
        other => Err(RosterError::UnsupportedFormat(other.to_string())),
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn parse_csv_roster(path: &Path) -> Result<Vec<RosterEntry>, RosterError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| RosterError::ParseError(e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| RosterError::ParseError(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    if !headers.iter().any(|h| h == "username") {
        return Err(RosterError::MissingColumn("username".to_string()));
    }

    let mut entries = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| RosterError::ParseError(e.to_string()))?;
        let columns: HashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|field| field.to_string()))
            .collect();

        match RosterEntry::from_columns(&columns) {
            Some(entry) => entries.push(entry),
            None => warn!("Skipping roster row {} with empty username", row_index + 2),
        }
    }

    Ok(entries)
}

fn parse_excel_roster(path: &Path) -> Result<Vec<RosterEntry>, RosterError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| RosterError::ParseError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RosterError::ParseError("workbook has no sheets".to_string()))?
        .map_err(|e| RosterError::ParseError(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| RosterError::ParseError("sheet is empty".to_string()))?
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect();

    if !headers.iter().any(|h| h == "username") {
        return Err(RosterError::MissingColumn("username".to_string()));
    }

    let mut entries = Vec::new();
    for (row_index, row) in rows.enumerate() {
        let columns: HashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(row.iter().map(cell_to_string))
            .collect();

        match RosterEntry::from_columns(&columns) {
            Some(entry) => entries.push(entry),
            None => warn!("Skipping roster row {} with empty username", row_index + 2),
        }
    }

    Ok(entries)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
