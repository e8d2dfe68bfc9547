use std::cmp::Ordering;

use super::*;
pub use chrono::{DateTime, Utc};
use serde::Serialize;

/// Label used when a contact is added without a category.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Category labels offered by the interactive menu. Any other label is accepted too.
pub const PRESET_CATEGORIES: [&str; 4] = ["Family", "Friends", "Work", "Other"];

/// A single entry of the contact list.
///
/// Contacts are only ever built by [`ContactStore::add`](super::manager::ContactStore::add)
/// and have no setters, so a snapshot handed out by the store can be freely cloned
/// without affecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: Uuid,
    name: String,
    phone: String,
    category: String,
    created_at: DateTime<Utc>,

    /// Position in the store's insertion order
    #[serde(skip)]
    seq: usize,
}

impl Contact {
    pub(crate) fn new(
        name: String,
        phone: String,
        category: String,
        created_at: DateTime<Utc>,
        seq: usize,
    ) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name,
            phone,
            category,
            created_at,
            seq,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn seq(&self) -> usize {
        self.seq
    }

    /// Ordinal name order. Equal names keep insertion order, so every sort
    /// built on this comparison agrees with a stable sort by name.
    pub fn alphabetical(a: &Contact, b: &Contact) -> Ordering {
        a.name.cmp(&b.name).then(a.seq.cmp(&b.seq))
    }

    /// Name order ignoring case, insertion order on ties.
    pub fn case_insensitive(a: &Contact, b: &Contact) -> Ordering {
        fold_case(&a.name)
            .cmp(&fold_case(&b.name))
            .then(a.seq.cmp(&b.seq))
    }

    /// Case-insensitive substring match on the name, exact substring match on the phone.
    pub fn matches_partial(&self, term: &str) -> bool {
        fold_case(&self.name).contains(&fold_case(term)) || self.phone.contains(term)
    }
}

pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
