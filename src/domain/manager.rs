use super::*;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::contact::{DateTime, Utc};
use super::search::{self, SearchMatch, SearchMode};
use super::sort;
use tracing::{debug, info};

/// In-memory contact list with a per-category index.
///
/// Contacts are append-only. Every read returns an owned snapshot.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    categories: HashMap<String, Vec<Contact>>,

    /// Category labels in the order they were first used
    category_order: Vec<String>,
    last_created: Option<DateTime<Utc>>,
    search_mode: SearchMode,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_mode(search_mode: SearchMode) -> Self {
        Self {
            search_mode,
            ..Self::default()
        }
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Appends a contact and files it under its category. Performs no validation.
    pub fn add(&mut self, name: &str, phone: &str, category: &str) -> Contact {
        let created_at = self.next_timestamp();
        let contact = Contact::new(
            name.to_string(),
            phone.to_string(),
            category.to_string(),
            created_at,
            self.contacts.len(),
        );

        if !self.categories.contains_key(category) {
            self.category_order.push(category.to_string());
        }
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(contact.clone());
        self.contacts.push(contact.clone());

        info!(
            id = %contact.id(),
            category = contact.category(),
            total = self.contacts.len(),
            "contact added"
        );
        contact
    }

    // Wall clock can step backwards; creation times must not.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created = Some(stamp);
        stamp
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Category labels in first-use order.
    pub fn categories(&self) -> Vec<String> {
        self.category_order.clone()
    }

    pub fn list_alphabetical(&self) -> Vec<Contact> {
        let mut sorted = self.contacts.clone();
        sorted.sort_by(Contact::alphabetical);
        debug!(count = sorted.len(), "listed alphabetically");
        sorted
    }

    pub fn list_by_quick_sort(&self) -> Vec<Contact> {
        let mut sorted = self.contacts.clone();
        sort::quick_sort(&mut sorted, Contact::alphabetical);
        debug!(count = sorted.len(), "listed by quick sort");
        sorted
    }

    pub fn list_by_merge_sort(&self) -> Vec<Contact> {
        let mut sorted = self.contacts.clone();
        sort::merge_sort(&mut sorted, Contact::alphabetical);
        debug!(count = sorted.len(), "listed by merge sort");
        sorted
    }

    /// Insertion order.
    pub fn list_fifo(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Reverse insertion order.
    pub fn list_lifo(&self) -> Vec<Contact> {
        self.contacts.iter().rev().cloned().collect()
    }

    /// Contacts filed under `category`; empty when the label was never used.
    pub fn list_by_category(&self, category: &str) -> Vec<Contact> {
        self.categories.get(category).cloned().unwrap_or_default()
    }

    pub fn search(&self, term: &str) -> Option<Contact> {
        self.locate(term).map(|found| found.contact)
    }

    /// Same as [`search`](Self::search) but reports which phase matched.
    pub fn locate(&self, term: &str) -> Option<SearchMatch> {
        let found = search::find_contact(&self.contacts, term, self.search_mode);
        debug!(
            mode = ?self.search_mode,
            phase = ?found.as_ref().map(|m| m.phase),
            "search finished"
        );
        found
    }
}

/// A [`ContactStore`] that can be cloned across threads.
///
/// Each call holds the lock for its whole duration, so reads never observe a
/// half-finished `add`.
#[derive(Debug, Clone, Default)]
pub struct SharedContactStore {
    inner: Arc<Mutex<ContactStore>>,
}

impl SharedContactStore {
    pub fn new(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(&self, name: &str, phone: &str, category: &str) -> Result<Contact, AppError> {
        Ok(self.inner.lock()?.add(name, phone, category))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.inner.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.inner.lock()?.is_empty())
    }

    pub fn list_alphabetical(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_alphabetical())
    }

    pub fn list_by_quick_sort(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_by_quick_sort())
    }

    pub fn list_by_merge_sort(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_by_merge_sort())
    }

    pub fn list_fifo(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_fifo())
    }

    pub fn list_lifo(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_lifo())
    }

    pub fn list_by_category(&self, category: &str) -> Result<Vec<Contact>, AppError> {
        Ok(self.inner.lock()?.list_by_category(category))
    }

    pub fn search(&self, term: &str) -> Result<Option<Contact>, AppError> {
        Ok(self.inner.lock()?.search(term))
    }
}
