pub mod storage_port;

use crate::prelude::{AppError, ContactManager};
