pub mod command;
pub mod display;
pub mod history;
pub mod run;

pub use run::{Session, run_app};
