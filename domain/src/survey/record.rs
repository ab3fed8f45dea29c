//! Assessment record entity and its identifier

use super::answers::AnswerSet;
use super::feedback::{Assessment, FeedbackItem};
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a record by the survey store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyId(String);

impl SurveyId {
    /// Wrap an identifier produced by a store or typed by a user.
    ///
    /// Only the characters a store could plausibly mint are accepted
    /// (ASCII alphanumerics, `-` and `_`), which also keeps ids safe to use
    /// as file names.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw))
        } else {
            Err(DomainError::InvalidSurveyId(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SurveyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SurveyId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Everything handed to the store for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurvey {
    pub answers: AnswerSet,
    pub assessment: String,
    pub feedback: Vec<FeedbackItem>,
}

impl NewSurvey {
    pub fn new(answers: AnswerSet, assessment: Assessment) -> Self {
        Self {
            answers,
            assessment: assessment.verdict,
            feedback: assessment.feedback,
        }
    }

    /// Stamp the identifier and creation time, producing the stored record
    pub fn into_record(self, id: SurveyId, created_at: DateTime<Utc>) -> AssessmentRecord {
        AssessmentRecord {
            id,
            answers: self.answers,
            assessment: self.assessment,
            feedback: self.feedback,
            created_at,
        }
    }
}

/// A persisted submission: answers, verdict and feedback (Entity)
///
/// Created once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: SurveyId,
    pub answers: AnswerSet,
    /// Sentiment-derived verdict narrative
    pub assessment: String,
    pub feedback: Vec<FeedbackItem>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_id_parse() {
        assert!(SurveyId::parse("3f2b8c1e-0d4a-4b8e-9a61-2f4c5d6e7f80").is_ok());
        assert!(SurveyId::parse("abc_123").is_ok());
        assert!(SurveyId::parse("").is_err());
        assert!(SurveyId::parse("../etc/passwd").is_err());
        assert!(SurveyId::parse("a/b").is_err());
    }

    #[test]
    fn test_into_record_keeps_content() {
        let answers = AnswerSet::new("good").with_answer(1, "fine");
        let feedback = vec![FeedbackItem::new("Question 1: How?\nResponse: ", "fine")];
        let new_survey = NewSurvey::new(answers.clone(), Assessment::new("verdict", feedback.clone()));

        let id = SurveyId::parse("abc").unwrap();
        let record = new_survey.into_record(id.clone(), Utc::now());
        assert_eq!(record.id, id);
        assert_eq!(record.answers, answers);
        assert_eq!(record.assessment, "verdict");
        assert_eq!(record.feedback, feedback);
    }

    #[test]
    fn test_survey_id_serializes_as_plain_string() {
        let id = SurveyId::parse("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
