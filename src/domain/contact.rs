use serde::{Deserialize, Serialize};

/// A single contact record. Fields are fixed once the contact is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    pub fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Contact {
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

#[cfg(test)]
impl Contact {
    /// True when all three fields equal the given values.
    pub(crate) fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}
