use super::*;
use tracing::{debug, warn};

/// In-memory contact list for a single session. Contacts are kept in the
/// order they were added and duplicates are allowed.
#[derive(Debug, Default)]
pub struct ContactManager {
    contacts: Vec<Contact>,
}

impl ContactManager {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Appends a contact built from the three fields.
    ///
    /// `None` marks a field as not supplied and rejects the whole call with
    /// [`AppError::InvalidContact`]; the list is left untouched in that case.
    /// Present values are stored as given, empty strings included.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<(), AppError> {
        let first_name = required(first_name, "first name")?;
        let last_name = required(last_name, "last name")?;
        let phone_number = required(phone_number, "phone number")?;

        self.contacts.push(Contact::new(
            first_name.to_string(),
            last_name.to_string(),
            phone_number.to_string(),
        ));
        debug!(total = self.contacts.len(), "contact added");

        Ok(())
    }

    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) => Ok(v),
        None => {
            warn!(field, "contact rejected, missing field");
            Err(AppError::InvalidContact(field.to_string()))
        }
    }
}
