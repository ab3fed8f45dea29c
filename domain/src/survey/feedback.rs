//! Feedback value objects - per-question results of the assessment pipeline.
//!
//! - [`FeedbackItem`] - one answered question with its generated feedback
//! - [`Assessment`] - the sentiment verdict plus the ordered feedback list

use serde::{Deserialize, Serialize};

/// Question text of the item returned when nothing was answered
pub const NO_RESPONSE_QUESTION: &str = "No response provided.";

/// Assessment text of the sentinel item when per-item assessment is enabled
pub const NO_ASSESSMENT: &str = "No assessment available.";

/// Feedback for one answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Question label, e.g. `"Question 2: Rate your stress...\nResponse: "`
    pub question: String,
    /// The submitter's answer as it appeared in the prompt
    pub response: String,
    /// Optional per-response assessment from a follow-up completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    /// Trimmed completion text returned for this question's prompt
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub completion: String,
}

impl FeedbackItem {
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            assessment: None,
            completion: String::new(),
        }
    }

    pub fn with_completion(mut self, completion: impl Into<String>) -> Self {
        self.completion = completion.into();
        self
    }

    pub fn with_assessment(mut self, assessment: impl Into<String>) -> Self {
        self.assessment = Some(assessment.into());
        self
    }

    /// The single item produced when no question was answered.
    ///
    /// When per-item assessments are enabled it carries [`NO_ASSESSMENT`] so
    /// that every item has the same shape.
    pub fn no_response(with_assessment: bool) -> Self {
        let item = Self::new(NO_RESPONSE_QUESTION, "");
        if with_assessment {
            item.with_assessment(NO_ASSESSMENT)
        } else {
            item
        }
    }

    /// Returns `true` for the "no response provided" sentinel
    pub fn is_no_response(&self) -> bool {
        self.question == NO_RESPONSE_QUESTION && self.response.is_empty()
    }
}

/// Complete assessment of one submission (verdict + feedback)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// One of the three fixed verdict narratives
    pub verdict: String,
    /// Feedback items in question order
    pub feedback: Vec<FeedbackItem>,
}

impl Assessment {
    pub fn new(verdict: impl Into<String>, feedback: Vec<FeedbackItem>) -> Self {
        Self {
            verdict: verdict.into(),
            feedback,
        }
    }
}
