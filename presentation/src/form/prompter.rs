//! Interactive survey form on a line-oriented terminal

use colored::Colorize;
use std::io::{self, BufRead, Write};
use survey_domain::{AnswerSet, QuestionSet, SubmissionRules};

/// Prompt for the free-text response
pub const RESPONSE_PROMPT: &str = "In your own words, how have you been feeling lately?";

/// Asks for every field a submission is still missing, one line per field
pub struct SurveyForm<'a> {
    questions: &'a QuestionSet,
    rules: SubmissionRules,
}

impl<'a> SurveyForm<'a> {
    pub fn new(questions: &'a QuestionSet, rules: SubmissionRules) -> Self {
        Self { questions, rules }
    }

    /// Whether any field still needs input
    pub fn needs_input(&self, answers: &AnswerSet) -> bool {
        answers.response().trim().is_empty()
            || self
                .questions
                .numbered()
                .any(|(n, _)| answers.non_empty_answer(n).is_none())
    }

    /// Prompt on `out` and read from `input` until every missing field is
    /// filled in.
    ///
    /// Required fields are asked again when left blank; optional questions
    /// accept an empty line. Returns `Ok(false)` if input ends first, leaving
    /// the remaining fields as they were.
    pub fn fill<R: BufRead, W: Write>(
        &self,
        answers: &mut AnswerSet,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        if answers.response().trim().is_empty() {
            match Self::ask(RESPONSE_PROMPT, true, input, out)? {
                Some(text) => answers.set_response(text),
                None => return Ok(false),
            }
        }

        for (number, question) in self.questions.numbered() {
            if answers.non_empty_answer(number).is_some() {
                continue;
            }
            let label = format!("Question {}: {}", number, question);
            match Self::ask(&label, self.rules.require_all_answers, input, out)? {
                Some(text) => answers.set_answer(number, text),
                None => return Ok(false),
            }
        }

        Ok(true)
    }

    fn ask<R: BufRead, W: Write>(
        label: &str,
        required: bool,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Option<String>> {
        loop {
            writeln!(out, "{}", label.bold())?;
            write!(out, "{} ", ">".cyan())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let text = line.trim().to_string();
            if !text.is_empty() || !required {
                return Ok(Some(text));
            }
            writeln!(out, "{}", "This field is required.".red())?;
        }
    }
}
