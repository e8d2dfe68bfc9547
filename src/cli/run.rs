use std::io::{self, BufRead, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{
        command::{Cli, MenuChoice},
        display::{self, OutputFormat},
        history::SearchHistory,
    },
    domain::{
        Contact, ContactStore,
        contact::{DEFAULT_CATEGORY, PRESET_CATEGORIES},
    },
    errors::AppError,
    validation::{normalize_category, require_field},
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level);
    debug!(?cli, "starting session");

    let store = ContactStore::with_search_mode(cli.search_mode);
    let history = SearchHistory::new(cli.history_limit);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, history, cli.format, stdin.lock(), stdout.lock());
    session.run()
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already initialised when the session is started twice in one process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Interactive menu over a [`ContactStore`].
///
/// Reads one answer per line from `input`. `*` at any prompt returns to the
/// menu and end of input ends the session.
pub struct Session<R, W> {
    store: ContactStore,
    history: SearchHistory,
    format: OutputFormat,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        store: ContactStore,
        history: SearchHistory,
        format: OutputFormat,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            history,
            format,
            input,
            output,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- Contact BOOK ---")?;

        loop {
            self.show_menu()?;

            let Some(action) = self.read_line()? else {
                break;
            };

            let choice = match MenuChoice::parse(&action) {
                Ok(choice) => choice,
                Err(e) => {
                    warn!(input = %action, "unrecognized menu entry");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            debug!(?choice, "menu entry selected");

            match choice {
                MenuChoice::AddContact => self.add_contact()?,
                MenuChoice::ShowAlphabetical => {
                    let contacts = self.store.list_alphabetical();
                    self.show(&contacts)?;
                }
                MenuChoice::ShowFifo => {
                    let contacts = self.store.list_fifo();
                    self.show(&contacts)?;
                }
                MenuChoice::ShowLifo => {
                    let contacts = self.store.list_lifo();
                    self.show(&contacts)?;
                }
                MenuChoice::QuickSort => {
                    let contacts = self.store.list_by_quick_sort();
                    self.show(&contacts)?;
                }
                MenuChoice::MergeSort => {
                    let contacts = self.store.list_by_merge_sort();
                    self.show(&contacts)?;
                }
                MenuChoice::ShowCategory => self.show_category()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::SearchHistory => self.show_history()?,
                MenuChoice::Exit => break,
            }
        }

        writeln!(self.output, "\nBye!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// `None` when the user backs out with `*` or input ends.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "\n{text} \n* to go back: ")?;
        self.output.flush()?;

        match self.read_line()? {
            Some(answer) if answer == "*" => Ok(None),
            answer => Ok(answer),
        }
    }

    /// Re-asks until `require_field` accepts the answer.
    fn prompt_required(&mut self, text: &str, label: &str) -> Result<Option<String>, AppError> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };

            match require_field(label, &answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    warn!(field = label, "rejected empty input");
                    writeln!(self.output, "\n{e}")?;
                }
            }
        }
    }

    fn add_contact(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_required("Enter contact name:", "Name")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt_required("Enter contact number:", "Phone")? else {
            return Ok(());
        };

        let text = format!(
            "Enter category ({}), blank for {}:",
            PRESET_CATEGORIES.join(", "),
            DEFAULT_CATEGORY
        );
        let Some(category) = self.prompt(&text)? else {
            return Ok(());
        };
        let category = normalize_category(&category);

        let contact = self.store.add(&name, &phone, &category);
        writeln!(self.output, "\nContact added successfully!")?;
        writeln!(self.output, "{}", display::format_contact(&contact))?;
        Ok(())
    }

    fn show_category(&mut self) -> Result<(), AppError> {
        let known = self.store.categories();
        let text = if known.is_empty() {
            "Enter category:".to_string()
        } else {
            format!("Enter category ({}):", known.join(", "))
        };

        let Some(category) = self.prompt(&text)? else {
            return Ok(());
        };
        let contacts = self.store.list_by_category(category.trim());
        self.show(&contacts)
    }

    fn search(&mut self) -> Result<(), AppError> {
        let Some(term) = self.prompt("Enter search term:")? else {
            return Ok(());
        };

        let Ok(term) = require_field("Search term", &term) else {
            warn!("rejected empty search term");
            writeln!(self.output, "\nPlease enter a search term")?;
            return Ok(());
        };

        match self.store.locate(&term) {
            Some(found) => {
                debug!(phase = ?found.phase, "search hit");
                self.history.push(&term);
                self.show(&[found.contact])
            }
            None => {
                writeln!(self.output, "\nNo contacts found matching: {term}")?;
                Ok(())
            }
        }
    }

    fn show_history(&mut self) -> Result<(), AppError> {
        if self.history.is_empty() {
            writeln!(self.output, "\nNo search history available")?;
            return Ok(());
        }

        writeln!(self.output, "\nSearch History (Most Recent First):\n")?;
        for term in self.history.most_recent_first() {
            writeln!(self.output, "\u{2022} {term}")?;
        }
        Ok(())
    }

    fn show(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        let rendered = display::render(contacts, self.format)?;
        writeln!(self.output, "\n{rendered}")?;
        Ok(())
    }
}
