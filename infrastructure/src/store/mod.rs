//! Survey store adapters

mod json_file;
mod memory;

pub use json_file::JsonFileSurveyStore;
pub use memory::InMemorySurveyStore;
