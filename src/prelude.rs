pub use crate::cli::{command, display, history::SearchHistory, run_app, Session};
pub use crate::domain::{
    contact::{self, Contact, DEFAULT_CATEGORY, PRESET_CATEGORIES},
    manager::{ContactStore, SharedContactStore},
    search::{MatchPhase, SearchMatch, SearchMode},
    sort::{merge_sort, quick_sort},
};
pub use crate::errors::AppError;
pub use crate::validation::{normalize_category, require_field};
