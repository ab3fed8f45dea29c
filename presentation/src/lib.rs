//! Presentation layer for survey-assess
//!
//! This crate contains CLI definitions, the interactive survey form,
//! output formatters and progress reporters.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SubmitArgs};
pub use form::{AnswersFileError, SurveyForm, apply_overrides, load_answers_file};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
