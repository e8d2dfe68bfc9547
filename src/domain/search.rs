use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::contact::{Contact, fold_case};

/// How the exact phase of a search orders contacts before probing them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Sort and probe with the same case-insensitive comparison.
    #[default]
    Consistent,
    /// Sort case-sensitively but probe case-insensitively. Mixed-case names can be
    /// skipped by the binary search and only found by the partial-match scan.
    Legacy,
}

/// Which phase of the lookup produced a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    Exact,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub contact: Contact,
    pub phase: MatchPhase,
}

/// Two-phase lookup over `contacts`, which must be in insertion order.
pub fn find_contact(contacts: &[Contact], term: &str, mode: SearchMode) -> Option<SearchMatch> {
    let exact = match mode {
        SearchMode::Consistent => exact_match_consistent(contacts, term),
        SearchMode::Legacy => exact_match_legacy(contacts, term),
    };

    if let Some(contact) = exact {
        return Some(SearchMatch {
            contact,
            phase: MatchPhase::Exact,
        });
    }

    partial_match(contacts, term).map(|contact| SearchMatch {
        contact,
        phase: MatchPhase::Partial,
    })
}

/// Binary search over a copy sorted by folded name; returns the earliest inserted
/// of the contacts whose name equals `term` ignoring case.
fn exact_match_consistent(contacts: &[Contact], term: &str) -> Option<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(Contact::case_insensitive);

    let term = fold_case(term);
    let first = sorted.partition_point(|c| fold_case(c.name()) < term);

    sorted
        .get(first)
        .filter(|c| fold_case(c.name()) == term)
        .cloned()
}

/// Midpoint binary search over a case-sensitive sort, probing case-insensitively.
fn exact_match_legacy(contacts: &[Contact], term: &str) -> Option<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(Contact::alphabetical);

    let term = fold_case(term);
    // `high` is exclusive; the midpoint rounds down over the inclusive range
    let (mut low, mut high) = (0usize, sorted.len());

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        let probe = fold_case(sorted[mid].name());

        match probe.cmp(&term) {
            Ordering::Equal => return Some(sorted[mid].clone()),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

fn partial_match(contacts: &[Contact], term: &str) -> Option<Contact> {
    contacts.iter().find(|c| c.matches_partial(term)).cloned()
}
