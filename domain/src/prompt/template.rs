//! Prompt templates for per-question feedback

/// Marker separating the question label from the response in a prompt
pub const RESPONSE_MARKER: &str = "Response: ";

/// Templates for the prompts sent to the completion service
pub struct FeedbackPrompt;

impl FeedbackPrompt {
    /// Prompt for one answered question
    pub fn question(number: usize, question: &str, response: &str) -> String {
        format!(
            "Question {}: {}\n{}{}",
            number, question, RESPONSE_MARKER, response
        )
    }

    /// Follow-up prompt asking for an assessment of a single response
    pub fn assessment(response: &str) -> String {
        format!(
            "As a professional psychologist, based on the response: {}",
            response
        )
    }

    /// Split a question prompt into `(label, response)`.
    ///
    /// The label keeps everything up to and including the first
    /// [`RESPONSE_MARKER`]; the response is the remainder. A prompt without
    /// the marker yields the whole prompt as the label and an empty response.
    pub fn split(prompt: &str) -> (&str, &str) {
        match prompt.find(RESPONSE_MARKER) {
            Some(pos) => prompt.split_at(pos + RESPONSE_MARKER.len()),
            None => (prompt, ""),
        }
    }
}
