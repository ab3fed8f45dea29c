//! Assess Survey use case
//!
//! Combines the sentiment verdict for the free-text `response` with the
//! generated per-question feedback.

use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use crate::use_cases::generate_feedback::{GenerateFeedbackUseCase, GenerationFailure};
use std::sync::Arc;
use survey_domain::{AnswerSet, Assessment, QuestionSet, SentimentAnalyzer};
use tracing::info;

/// Use case for assessing one answer set
pub struct AssessSurveyUseCase {
    analyzer: Arc<dyn SentimentAnalyzer>,
    feedback: GenerateFeedbackUseCase,
    questions: Arc<QuestionSet>,
}

impl AssessSurveyUseCase {
    pub fn new(
        analyzer: Arc<dyn SentimentAnalyzer>,
        feedback: GenerateFeedbackUseCase,
        questions: Arc<QuestionSet>,
    ) -> Self {
        Self {
            analyzer,
            feedback,
            questions,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, answers: &AnswerSet) -> Result<Assessment, GenerationFailure> {
        self.execute_with_progress(answers, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Fails as a whole if feedback generation fails; no verdict is returned
    /// without its feedback.
    pub async fn execute_with_progress(
        &self,
        answers: &AnswerSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<Assessment, GenerationFailure> {
        progress.on_stage_start(Stage::Sentiment, 0);
        let sentiment = self.analyzer.classify(answers.response());
        progress.on_stage_complete(Stage::Sentiment, true);
        info!("Response sentiment: {}", sentiment);

        let feedback = self
            .feedback
            .execute_with_progress(answers, &self.questions, progress)
            .await?;

        Ok(Assessment::new(sentiment.verdict(), feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedbackParams;
    use crate::ports::completion_gateway::GatewayError;
    use crate::use_cases::generate_feedback::tests::{MockGateway, three_questions};
    use survey_domain::{FeedbackItem, LexiconAnalyzer, Sentiment};

    fn use_case(gateway: Arc<MockGateway>) -> AssessSurveyUseCase {
        AssessSurveyUseCase::new(
            Arc::new(LexiconAnalyzer),
            GenerateFeedbackUseCase::new(gateway, FeedbackParams::default()),
            Arc::new(three_questions()),
        )
    }

    #[tokio::test]
    async fn test_positive_response_full_answers() {
        let gateway = Arc::new(MockGateway::echoing());
        let answers = AnswerSet::from_ordered("I feel great today", ["fine", "3", "work"]);

        let assessment = use_case(gateway.clone()).execute(&answers).await.unwrap();

        assert_eq!(assessment.verdict, Sentiment::Positive.verdict());
        assert_eq!(assessment.feedback.len(), 3);
        let responses: Vec<&str> = assessment
            .feedback
            .iter()
            .map(|f| f.response.as_str())
            .collect();
        assert_eq!(responses, vec!["fine", "3", "work"]);
        assert_eq!(gateway.request_count(), 1);
        assert_eq!(gateway.requests.lock().unwrap()[0].prompts.len(), 3);
    }

    #[tokio::test]
    async fn test_all_empty_is_neutral_with_sentinel() {
        let gateway = Arc::new(MockGateway::echoing());
        let answers = AnswerSet::from_ordered("", ["", "", ""]);

        let assessment = use_case(gateway.clone()).execute(&answers).await.unwrap();

        assert_eq!(assessment.verdict, Sentiment::Neutral.verdict());
        assert_eq!(assessment.feedback, vec![FeedbackItem::no_response(false)]);
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_verdict_depends_only_on_response() {
        let a = AnswerSet::from_ordered("Everything is terrible", ["fine", "3", "work"]);
        let b = AnswerSet::from_ordered("Everything is terrible", ["", "10", ""]);

        let first = use_case(Arc::new(MockGateway::echoing()))
            .execute(&a)
            .await
            .unwrap();
        let second = use_case(Arc::new(MockGateway::echoing()))
            .execute(&b)
            .await
            .unwrap();

        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.verdict, Sentiment::Negative.verdict());
    }

    #[tokio::test]
    async fn test_generation_failure_fails_assessment() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let answers = AnswerSet::from_ordered("I feel great today", ["fine", "3", "work"]);

        let result = use_case(gateway).execute(&answers).await;
        assert!(matches!(
            result,
            Err(GenerationFailure::GatewayError(GatewayError::Timeout))
        ));
    }
}
