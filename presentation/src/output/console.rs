//! Console output formatter for survey results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use survey_application::SubmitSurveyOutput;
use survey_domain::core::string::preview;
use survey_domain::{AssessmentRecord, FeedbackItem, OutputFormat, QuestionSet, SurveyId};

/// Width of the response preview in listings
const PREVIEW_CHARS: usize = 48;

/// Formats survey results for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

/// JSON shape of a fresh submission
#[derive(Serialize)]
struct SubmissionView<'a> {
    id: &'a SurveyId,
    assessment: &'a str,
    feedback: &'a [FeedbackItem],
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Globally enable or disable ANSI colors
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn feedback_item(item: &FeedbackItem) -> String {
        if item.is_no_response() {
            let mut out = format!("\n{}\n", item.question.dimmed());
            if let Some(assessment) = &item.assessment {
                out.push_str(&format!("{}\n", assessment.dimmed()));
            }
            return out;
        }

        // The label ends with the "Response: " marker; the answer follows it.
        let (title, marker) = item
            .question
            .split_once('\n')
            .unwrap_or((item.question.as_str(), ""));

        let mut out = format!(
            "\n{}\n{}{}\n",
            format!("── {} ──", title).yellow().bold(),
            marker.bold(),
            item.response
        );
        if !item.completion.is_empty() {
            out.push_str(&format!("{}\n", Self::indent(&item.completion, "  ")));
        }
        if let Some(assessment) = &item.assessment {
            out.push_str(&format!(
                "{} {}\n",
                "Assessment:".green().bold(),
                assessment
            ));
        }
        out
    }

    fn full_assessment(id: &SurveyId, verdict: &str, feedback: &[FeedbackItem]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{} {}\n", "Survey:".cyan().bold(), id));

        output.push_str(&Self::section_header("Assessment"));
        output.push_str(&format!("\n{}\n", verdict));

        output.push_str(&Self::section_header("Feedback"));
        for item in feedback {
            output.push_str(&Self::feedback_item(item));
        }
        output
    }

    fn summary(id: &SurveyId, verdict: &str) -> String {
        format!("{} {}\n\n{}\n", "Survey:".bold(), id, verdict)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_submission(&self, output: &SubmitSurveyOutput) -> String {
        let assessment = &output.assessment;
        match self.format {
            OutputFormat::Json => Self::to_json(&SubmissionView {
                id: &output.id,
                assessment: &assessment.verdict,
                feedback: &assessment.feedback,
            }),
            OutputFormat::Summary => Self::summary(&output.id, &assessment.verdict),
            OutputFormat::Full => {
                let mut out = Self::header("Survey Assessment");
                out.push('\n');
                out.push_str(&Self::full_assessment(
                    &output.id,
                    &assessment.verdict,
                    &assessment.feedback,
                ));
                out.push_str(&Self::footer());
                out
            }
        }
    }

    fn format_record(&self, record: &AssessmentRecord) -> String {
        match self.format {
            OutputFormat::Json => Self::to_json(record),
            OutputFormat::Summary => Self::summary(&record.id, &record.assessment),
            OutputFormat::Full => {
                let mut out = Self::header("Survey Details");
                out.push('\n');
                out.push_str(&format!(
                    "{} {}\n",
                    "Submitted:".cyan().bold(),
                    record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
                out.push_str(&format!(
                    "{} {}\n",
                    "Response:".cyan().bold(),
                    record.answers.response()
                ));
                out.push_str(&Self::full_assessment(
                    &record.id,
                    &record.assessment,
                    &record.feedback,
                ));
                out.push_str(&Self::footer());
                out
            }
        }
    }

    fn format_list(&self, records: &[AssessmentRecord]) -> String {
        match self.format {
            OutputFormat::Json => Self::to_json(records),
            OutputFormat::Summary => records
                .iter()
                .map(|r| format!("{}\n", r.id))
                .collect(),
            OutputFormat::Full => {
                if records.is_empty() {
                    return format!("{}\n", "No surveys yet.".dimmed());
                }
                let mut out = Self::section_header(&format!("Surveys ({})", records.len()));
                for record in records {
                    out.push_str(&format!(
                        "{}  {}  {}\n",
                        record.id.to_string().yellow(),
                        record.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                        preview(record.answers.response(), PREVIEW_CHARS)
                    ));
                }
                out
            }
        }
    }

    fn format_questions(&self, questions: &QuestionSet) -> String {
        match self.format {
            OutputFormat::Json => {
                let list: Vec<&str> = questions.numbered().map(|(_, q)| q).collect();
                Self::to_json(&list)
            }
            OutputFormat::Full | OutputFormat::Summary => questions
                .numbered()
                .map(|(n, q)| format!("{:>2}. {}\n", n, q))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use survey_domain::{AnswerSet, Assessment};

    fn plain() {
        colored::control::set_override(false);
    }

    fn item(n: usize, question: &str, answer: &str) -> FeedbackItem {
        FeedbackItem::new(format!("Question {}: {}\nResponse: ", n, question), answer)
            .with_completion("Try to keep a regular schedule.")
    }

    fn output() -> SubmitSurveyOutput {
        SubmitSurveyOutput {
            id: SurveyId::parse("abc-123").unwrap(),
            assessment: Assessment::new(
                "You seem to be in a positive state of mind.",
                vec![item(1, "How did you sleep?", "Badly")],
            ),
        }
    }

    fn record(id: &str, response: &str) -> AssessmentRecord {
        AssessmentRecord {
            id: SurveyId::parse(id).unwrap(),
            answers: AnswerSet::new(response).with_answer(1, "Badly"),
            assessment: "verdict".to_string(),
            feedback: vec![FeedbackItem::no_response(false)],
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_full_submission_shows_feedback() {
        plain();
        let text = ConsoleFormatter::new(OutputFormat::Full).format_submission(&output());
        assert!(text.contains("Survey: abc-123"));
        assert!(text.contains("You seem to be in a positive state of mind."));
        assert!(text.contains("── Question 1: How did you sleep? ──"));
        assert!(text.contains("Response: Badly"));
        assert!(text.contains("  Try to keep a regular schedule."));
    }

    #[test]
    fn test_summary_omits_feedback() {
        plain();
        let text = ConsoleFormatter::new(OutputFormat::Summary).format_submission(&output());
        assert!(text.contains("abc-123"));
        assert!(!text.contains("Question 1"));
    }

    #[test]
    fn test_json_submission() {
        let text = ConsoleFormatter::new(OutputFormat::Json).format_submission(&output());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["feedback"][0]["response"], "Badly");
        assert_eq!(value["feedback"][0]["completion"], "Try to keep a regular schedule.");
    }

    #[test]
    fn test_record_shows_sentinel_item() {
        plain();
        let text = ConsoleFormatter::new(OutputFormat::Full).format_record(&record("r1", "ok"));
        assert!(text.contains("Submitted: 2024-05-01 09:30:00 UTC"));
        assert!(text.contains("No response provided."));
    }

    #[test]
    fn test_list_previews_responses() {
        plain();
        let long = "word ".repeat(40);
        let records = vec![record("r1", "Fine\nreally"), record("r2", &long)];
        let text = ConsoleFormatter::new(OutputFormat::Full).format_list(&records);
        assert!(text.contains("Surveys (2)"));
        assert!(text.contains("r1  2024-05-01 09:30  Fine really"));
        assert!(text.contains("..."));

        let empty = ConsoleFormatter::new(OutputFormat::Full).format_list(&[]);
        assert!(empty.contains("No surveys yet."));

        let json = ConsoleFormatter::new(OutputFormat::Json).format_list(&records);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_questions_numbered() {
        let questions =
            QuestionSet::new(vec!["How did you sleep?".to_string(), "Stress?".to_string()])
                .unwrap();
        let text = ConsoleFormatter::default().format_questions(&questions);
        assert_eq!(text, " 1. How did you sleep?\n 2. Stress?\n");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
