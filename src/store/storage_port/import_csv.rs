use std::path::PathBuf;

use super::*;
use csv::{Reader, ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::{info, warn};

pub const IMPORT_PATH: &str = "./import_export/contacts.csv";

const CONTACT_HEADERS: [&str; 3] = ["first_name", "last_name", "phone_number"];

/// Outcome of an import run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u64,
    pub rejected: u64,
}

// Empty cells come back as `None` and are treated as missing fields.
#[derive(Debug, Deserialize)]
struct ContactRow {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
}

fn resolve_source(src: Option<&str>) -> Result<PathBuf, AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    Ok(file_path)
}

fn check_headers(headers: &StringRecord) -> Result<(), AppError> {
    if headers.iter().map(str::trim).eq(CONTACT_HEADERS) {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "CSV header must be {}",
        CONTACT_HEADERS.join(",")
    )))
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

fn record_outcome(
    report: &mut ImportReport,
    line: u64,
    outcome: Result<(), AppError>,
) -> Result<(), AppError> {
    match outcome {
        Ok(()) => report.imported += 1,
        Err(e) if e.is_invalid_contact() => {
            warn!(line, error = %e, "skipping csv row");
            report.rejected += 1;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Reads `first_name,last_name,phone_number` rows into `manager`.
///
/// Rows with a missing field are skipped and counted as rejected; a
/// malformed file or a different header row aborts the import.
pub fn import_contacts_from_csv(
    manager: &mut ContactManager,
    src: Option<&str>,
) -> Result<(PathBuf, ImportReport), AppError> {
    let file_path = resolve_source(src)?;
    let mut reader = Reader::from_path(&file_path)?;
    let headers = reader.headers()?.clone();
    check_headers(&headers)?;

    let mut report = ImportReport::default();
    for result in reader.records() {
        let record = result?;
        let row: ContactRow = record.deserialize(Some(&headers))?;
        let outcome = manager.add_contact(
            row.first_name.as_deref(),
            row.last_name.as_deref(),
            row.phone_number.as_deref(),
        );
        record_outcome(&mut report, record_line(&record), outcome)?;
    }

    info!(
        path = %file_path.display(),
        imported = report.imported,
        rejected = report.rejected,
        "csv import finished"
    );
    Ok((file_path, report))
}

/// Reads a headerless, single-column file of phone numbers and adds one
/// contact per row under the given names.
pub fn import_phone_numbers_from_csv(
    manager: &mut ContactManager,
    src: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(PathBuf, ImportReport), AppError> {
    let file_path = resolve_source(src)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&file_path)?;

    let mut report = ImportReport::default();
    for result in reader.records() {
        let record = result?;
        let phone = record.get(0).map(str::trim).filter(|p| !p.is_empty());

        let outcome = manager.add_contact(first_name, last_name, phone);
        record_outcome(&mut report, record_line(&record), outcome)?;
    }

    info!(
        path = %file_path.display(),
        imported = report.imported,
        rejected = report.rejected,
        "phone number import finished"
    );
    Ok((file_path, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn imports_rows_in_order() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(
            &path,
            "first_name,last_name,phone_number\n\
            John,Doe,0123456789\n\
            Jane,Roe,0987654321\n",
        )?;

        let mut manager = ContactManager::new();
        let (_, report) = import_contacts_from_csv(&mut manager, path.to_str())?;

        assert_eq!(
            report,
            ImportReport {
                imported: 2,
                rejected: 0
            }
        );
        assert!(manager.get_all_contacts()[0].matches("John", "Doe", "0123456789"));
        assert!(manager.get_all_contacts()[1].matches("Jane", "Roe", "0987654321"));
        Ok(())
    }

    #[test]
    fn rows_with_empty_cells_are_rejected() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(
            &path,
            "first_name,last_name,phone_number\n\
            ,Doe,0123456789\n\
            John,,0123456789\n\
            John,Doe,\n\
            John,Doe,0123456789\n",
        )?;

        let mut manager = ContactManager::new();
        let (_, report) = import_contacts_from_csv(&mut manager, path.to_str())?;

        assert_eq!(report.imported, 1);
        assert_eq!(report.rejected, 3);
        assert_eq!(manager.len(), 1);
        Ok(())
    }

    #[test]
    fn imports_single_column_phone_numbers() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("data.csv");
        fs::write(&path, "0123456789\n0123456789\n0123456789\n")?;

        let mut manager = ContactManager::new();
        let (_, report) =
            import_phone_numbers_from_csv(&mut manager, path.to_str(), Some("John"), Some("Doe"))?;

        assert_eq!(report.imported, 3);
        assert_eq!(manager.len(), 3);
        assert!(
            manager
                .get_all_contacts()
                .iter()
                .all(|c| c.matches("John", "Doe", "0123456789"))
        );
        Ok(())
    }

    #[test]
    fn phone_numbers_without_a_name_are_rejected() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("data.csv");
        fs::write(&path, "0123456789\n")?;

        let mut manager = ContactManager::new();
        let (_, report) =
            import_phone_numbers_from_csv(&mut manager, path.to_str(), None, Some("Doe"))?;

        assert_eq!(report.rejected, 1);
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn headerless_file_is_refused() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("data.csv");
        fs::write(&path, "0123456789\n0123456789\n0123456789\n")?;

        let mut manager = ContactManager::new();
        let err = import_contacts_from_csv(&mut manager, path.to_str()).unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("first_name")));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn wrong_header_is_refused() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "name,surname,phone\nJohn,Doe,0123456789\n")?;

        let mut manager = ContactManager::new();
        let err = import_contacts_from_csv(&mut manager, path.to_str()).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn quoted_multiline_field_keeps_row_lines() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(
            &path,
            "first_name,last_name,phone_number\n\
            \"John\nJr\",Doe,0123456789\n\
            Jane,Roe,0987654321\n",
        )?;

        let mut reader = Reader::from_path(&path)?;
        let lines: Vec<u64> = reader
            .records()
            .map(|r| r.map(|rec| record_line(&rec)))
            .collect::<Result<_, _>>()?;
        assert_eq!(lines, vec![2, 4]);

        let mut manager = ContactManager::new();
        let (_, report) = import_contacts_from_csv(&mut manager, path.to_str())?;

        assert_eq!(report.imported, 2);
        assert_eq!(manager.get_all_contacts()[0].first_name(), "John\nJr");
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let mut manager = ContactManager::new();

        let err = import_contacts_from_csv(&mut manager, Some("./no/such/file.csv")).unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn non_csv_file_is_refused() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "first_name,last_name,phone_number\n")?;

        let mut manager = ContactManager::new();
        let err = import_contacts_from_csv(&mut manager, path.to_str()).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        Ok(())
    }
}
