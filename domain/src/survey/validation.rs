//! Submission validation against the question set.
//!
//! A submission is checked field by field and every problem is reported at
//! once, so a form can be re-presented with all missing fields marked.

use super::answers::{AnswerSet, RESPONSE_FIELD, question_field};
use super::question_set::QuestionSet;
use crate::core::string::is_blank;
use thiserror::Error;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// A required field is missing or blank
    Required,
    /// An answer was given for a question number outside the set
    UnknownQuestion,
}

/// One rejected field of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name (`response`, `question2`, ...)
    pub field: String,
    pub problem: FieldProblem,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.problem {
            FieldProblem::Required => write!(f, "{}: this field is required", self.field),
            FieldProblem::UnknownQuestion => {
                write!(f, "{}: no such question in this survey", self.field)
            }
        }
    }
}

/// A submission failed required-field validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Submission is invalid: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Which fields a submission must fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionRules {
    /// Every question must be answered (otherwise only `response` is required)
    pub require_all_answers: bool,
}

impl Default for SubmissionRules {
    fn default() -> Self {
        Self {
            require_all_answers: true,
        }
    }
}

impl SubmissionRules {
    /// Validate `answers` against `questions`.
    pub fn validate(
        &self,
        answers: &AnswerSet,
        questions: &QuestionSet,
    ) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if is_blank(answers.response()) {
            issues.push(FieldIssue {
                field: RESPONSE_FIELD.to_string(),
                problem: FieldProblem::Required,
            });
        }

        if self.require_all_answers {
            for (number, _) in questions.numbered() {
                if answers.non_empty_answer(number).is_none() {
                    issues.push(FieldIssue {
                        field: question_field(number),
                        problem: FieldProblem::Required,
                    });
                }
            }
        }

        for number in answers.answered_numbers() {
            if !questions.contains_number(number) {
                issues.push(FieldIssue {
                    field: question_field(number),
                    problem: FieldProblem::UnknownQuestion,
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}
