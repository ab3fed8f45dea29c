//! Collecting a submission from the command line and stdin

pub mod answers_file;
pub mod prompter;

pub use answers_file::{AnswersFileError, apply_overrides, load_answers_file};
pub use prompter::SurveyForm;
