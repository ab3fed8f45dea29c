//! Output formatter trait

use survey_application::SubmitSurveyOutput;
use survey_domain::{AssessmentRecord, QuestionSet};

/// Trait for formatting survey results
pub trait OutputFormatter {
    /// Assessment returned by a fresh submission
    fn format_submission(&self, output: &SubmitSurveyOutput) -> String;

    /// One stored survey (detail view)
    fn format_record(&self, record: &AssessmentRecord) -> String;

    /// All stored surveys (listing)
    fn format_list(&self, records: &[AssessmentRecord]) -> String;

    /// The numbered question set
    fn format_questions(&self, questions: &QuestionSet) -> String;
}
