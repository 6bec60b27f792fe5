//! CSV export of derived rows.
//!
//! The format is deliberately simple: fields are never quoted, every comma
//! inside a field becomes a semicolon, and lines end with a bare `\n`.
//! The escaping is lossy and there is no reader for it.

use crate::{DerivedRow, Result, Target, WEEKS};
use std::path::Path;

/// Default download name for an export
pub const EXPORT_FILE_NAME: &str = "gym_overkropp_4v.csv";

/// Content type for an export
pub const EXPORT_MIME: &str = "text/csv; charset=utf-8";

/// Fixed header, one column per field in each data line
pub const HEADER: [&str; 3 + 2 * WEEKS] = [
    "Övning",
    "Set×Reps",
    "Start",
    "Mål v1",
    "Utfört v1",
    "Mål v2",
    "Utfört v2",
    "Mål v3",
    "Utfört v3",
    "Mål v4",
    "Utfört v4",
];

const LINE_TERMINATOR: u8 = b'\n';

/// Replace every comma in a field with a semicolon
pub fn escape_field(field: &str) -> String {
    field.replace(',', ";")
}

fn target_field(target: &Target) -> String {
    target.map(|t| t.to_string()).unwrap_or_default()
}

/// Fields of one data line, in header order
fn row_fields(row: &DerivedRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(HEADER.len());
    fields.push(row.name.clone());
    fields.push(row.scheme.clone());
    fields.push(row.start.clone());
    for (target, actual) in row.targets.iter().zip(&row.actuals) {
        fields.push(target_field(target));
        fields.push(actual.clone());
    }
    fields
}

/// Serialize rows to CSV text: the header line plus one line per row
pub fn to_csv(rows: &[DerivedRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(LINE_TERMINATOR))
        .from_writer(Vec::new());

    writer.write_record(HEADER.iter().map(|h| escape_field(h)))?;
    for row in rows {
        writer.write_record(row_fields(row).iter().map(|f| escape_field(f)))?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let mut text = String::from_utf8(bytes)
        .map_err(|e| crate::Error::Other(format!("CSV output is not UTF-8: {}", e)))?;
    // The writer terminates every record; the last line carries no newline
    if text.ends_with(LINE_TERMINATOR as char) {
        text.pop();
    }
    Ok(text)
}

/// Write an export to disk, creating the parent directory if needed
pub fn write_export(path: &Path, csv: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, csv)?;
    tracing::info!("Exported CSV to {:?}", path);
    Ok(())
}
