pub mod contact;
pub mod manager;
pub mod search;
pub mod sort;

use crate::errors::AppError;
pub use contact::Contact;
pub use manager::{ContactStore, SharedContactStore};
use uuid::Uuid;
