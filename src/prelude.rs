pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::store::storage_port::{self, ImportReport};
