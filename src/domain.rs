pub mod contact;
pub mod manager;

pub use crate::errors::AppError;
pub use contact::Contact;
