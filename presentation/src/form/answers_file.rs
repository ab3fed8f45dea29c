//! Answers given up front: an answers file and command-line flags

use std::path::{Path, PathBuf};
use survey_domain::AnswerSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnswersFileError {
    #[error("Cannot read answers file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid answers file {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// Load an answers file.
///
/// The file is a flat JSON object of form fields, the same shape in which
/// answers are stored: `{"response": "...", "question1": "...", ...}`.
pub fn load_answers_file(path: &Path) -> Result<AnswerSet, AnswersFileError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| AnswersFileError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|e| AnswersFileError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Apply `--response` and `--answer` flags on top of `answers`.
///
/// Ordered answers are numbered from question 1.
pub fn apply_overrides(answers: &mut AnswerSet, response: Option<&str>, ordered: &[String]) {
    if let Some(response) = response {
        answers.set_response(response);
    }
    for (i, answer) in ordered.iter().enumerate() {
        answers.set_answer(i + 1, answer.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(
            &path,
            r#"{"response": "I feel great today", "question1": "7 hours", "question3": ""}"#,
        )
        .unwrap();

        let answers = load_answers_file(&path).unwrap();
        assert_eq!(answers.response(), "I feel great today");
        assert_eq!(answers.answer(1), Some("7 hours"));
        assert_eq!(answers.answer(3), Some(""));
        assert_eq!(answers.answer(2), None);
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_answers_file(&dir.path().join("missing.json")),
            Err(AnswersFileError::Unreadable { .. })
        ));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"mood": "ok"}"#).unwrap();
        assert!(matches!(
            load_answers_file(&path),
            Err(AnswersFileError::Invalid { .. })
        ));
    }

    #[test]
    fn test_flags_override_file_answers() {
        let mut answers = AnswerSet::new("from file")
            .with_answer(1, "file one")
            .with_answer(2, "file two");
        apply_overrides(&mut answers, Some("from flag"), &["flag one".to_string()]);

        assert_eq!(answers.response(), "from flag");
        assert_eq!(answers.answer(1), Some("flag one"));
        assert_eq!(answers.answer(2), Some("file two"));
    }
}
