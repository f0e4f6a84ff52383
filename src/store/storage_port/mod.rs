pub mod import_csv;

use super::*;
pub use import_csv::{ImportReport, import_contacts_from_csv, import_phone_numbers_from_csv};
