use clap::Parser;

use crate::cli::display::OutputFormat;
use crate::domain::search::SearchMode;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "In-memory contact list")]
pub struct Cli {
    /// Exact-match strategy used by search (consistent, legacy)
    #[arg(long, env = "CONTACTS_SEARCH_MODE", value_enum, default_value_t = SearchMode::Consistent)]
    pub search_mode: SearchMode,

    /// Keep at most this many search terms in the history
    #[arg(long, env = "CONTACTS_HISTORY_LIMIT")]
    pub history_limit: Option<usize>,

    /// Listing format (table, json)
    #[arg(long, env = "CONTACTS_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log filter written to stderr, e.g. "debug" or "rusty_contacts=trace"
    #[arg(long, env = "CONTACTS_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Entries of the interactive menu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ShowAlphabetical,
    ShowFifo,
    ShowLifo,
    QuickSort,
    MergeSort,
    ShowCategory,
    Search,
    SearchHistory,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddContact,
        MenuChoice::ShowAlphabetical,
        MenuChoice::ShowFifo,
        MenuChoice::ShowLifo,
        MenuChoice::QuickSort,
        MenuChoice::MergeSort,
        MenuChoice::ShowCategory,
        MenuChoice::Search,
        MenuChoice::SearchHistory,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddContact => "Add Contact",
            MenuChoice::ShowAlphabetical => "Show A-Z",
            MenuChoice::ShowFifo => "Show FIFO",
            MenuChoice::ShowLifo => "Show LIFO",
            MenuChoice::QuickSort => "Quick Sort",
            MenuChoice::MergeSort => "Merge Sort",
            MenuChoice::ShowCategory => "Show Category",
            MenuChoice::Search => "Search",
            MenuChoice::SearchHistory => "Search History",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(MenuChoice::AddContact),
            "2" => Ok(MenuChoice::ShowAlphabetical),
            "3" => Ok(MenuChoice::ShowFifo),
            "4" => Ok(MenuChoice::ShowLifo),
            "5" => Ok(MenuChoice::QuickSort),
            "6" => Ok(MenuChoice::MergeSort),
            "7" => Ok(MenuChoice::ShowCategory),
            "8" => Ok(MenuChoice::Search),
            "9" => Ok(MenuChoice::SearchHistory),
            "10" | "q" => Ok(MenuChoice::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}
