use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Contact;
use crate::errors::AppError;

pub const EMPTY_LIST: &str = "No contacts found.";

/// How listings are written to the terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One rendered line of a listing. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub name: String,
    pub phone: String,
    pub category: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        ContactRow {
            name: contact.name().to_string(),
            phone: contact.phone().to_string(),
            category: contact.category().to_string(),
        }
    }
}

pub fn format_contact(contact: &Contact) -> String {
    format!(
        "{} - {} ({})",
        contact.name(),
        contact.phone(),
        contact.category()
    )
}

pub fn rows(contacts: &[Contact]) -> Vec<ContactRow> {
    contacts.iter().map(ContactRow::from).collect()
}

pub fn render(contacts: &[Contact], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(render_table(contacts)),
        OutputFormat::Json => render_json(contacts),
    }
}

pub fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let mut output = String::new();
    for (mut i, row) in rows(contacts).iter().enumerate() {
        i += 1;
        output.push_str(&format!(
            "{i:>3}. {:<20} {:15} {:<15}\n",
            row.name, row.phone, row.category
        ));
    }
    output.trim_end().to_string()
}

pub fn render_json(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&rows(contacts))?)
}
