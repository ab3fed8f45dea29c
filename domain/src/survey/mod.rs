//! Survey domain - questions, answers, feedback and stored records.
//!
//! - [`question_set::QuestionSet`] — ordered, immutable survey questions
//! - [`answers::AnswerSet`] — one submission's answers
//! - [`feedback::FeedbackItem`] / [`feedback::Assessment`] — pipeline output
//! - [`record::AssessmentRecord`] — what the survey store keeps
//! - [`validation::SubmissionRules`] — required-field checks

pub mod answers;
pub mod feedback;
pub mod question_set;
pub mod record;
pub mod validation;
