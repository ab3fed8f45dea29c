//! Use cases (application services)

pub mod assess_survey;
pub mod generate_feedback;
pub mod submit_survey;
pub mod view_survey;
