//! Generate Feedback use case.
//!
//! Builds one prompt per answered question, requests all completions in a
//! single batch, and turns each completion into a [`FeedbackItem`].
//!
//! Unanswered questions produce neither a prompt nor an item. When nothing
//! was answered the gateway is not called at all and a single
//! "no response provided" item is returned.

use crate::config::FeedbackParams;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use std::sync::Arc;
use survey_domain::{AnswerSet, CompletionRequest, FeedbackItem, FeedbackPrompt, QuestionSet};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The completion service did not produce usable feedback.
#[derive(Error, Debug)]
pub enum GenerationFailure {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Expected {expected} completions, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Use case for generating per-question feedback.
#[derive(Clone)]
pub struct GenerateFeedbackUseCase {
    gateway: Arc<dyn CompletionGateway>,
    params: FeedbackParams,
}

impl GenerateFeedbackUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: FeedbackParams) -> Self {
        Self { gateway, params }
    }

    /// Generate feedback with default (no-op) progress
    pub async fn execute(
        &self,
        answers: &AnswerSet,
        questions: &QuestionSet,
    ) -> Result<Vec<FeedbackItem>, GenerationFailure> {
        self.execute_with_progress(answers, questions, &NoProgress)
            .await
    }

    /// Generate feedback with progress callbacks
    pub async fn execute_with_progress(
        &self,
        answers: &AnswerSet,
        questions: &QuestionSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<FeedbackItem>, GenerationFailure> {
        let prompts = Self::build_prompts(answers, questions);

        if prompts.is_empty() {
            debug!("No answered questions; returning the no-response item");
            return Ok(vec![FeedbackItem::no_response(self.params.enrich_feedback)]);
        }

        info!("Requesting feedback for {} answered questions", prompts.len());
        progress.on_stage_start(Stage::Feedback, 1);

        let completions = match self.request_batch(prompts.clone()).await {
            Ok(completions) => {
                progress.on_task_complete(Stage::Feedback, true);
                progress.on_stage_complete(Stage::Feedback, true);
                completions
            }
            Err(e) => {
                warn!("Feedback batch failed: {}", e);
                progress.on_task_complete(Stage::Feedback, false);
                progress.on_stage_complete(Stage::Feedback, false);
                return Err(e);
            }
        };

        let mut items: Vec<FeedbackItem> = prompts
            .iter()
            .zip(completions)
            .map(|(prompt, completion)| {
                let (question, response) = FeedbackPrompt::split(prompt);
                FeedbackItem::new(question, response).with_completion(completion.trim())
            })
            .collect();

        if self.params.enrich_feedback {
            self.enrich(&mut items, progress).await?;
        }

        Ok(items)
    }

    /// One prompt per non-empty answer, in question order
    fn build_prompts(answers: &AnswerSet, questions: &QuestionSet) -> Vec<String> {
        questions
            .numbered()
            .filter_map(|(number, question)| {
                answers
                    .non_empty_answer(number)
                    .map(|response| FeedbackPrompt::question(number, question, response))
            })
            .collect()
    }

    /// Send one request and insist on one completion per prompt
    async fn request_batch(&self, prompts: Vec<String>) -> Result<Vec<String>, GenerationFailure> {
        let request = CompletionRequest::new(
            self.params.model.clone(),
            prompts,
            self.params.sampling.clone(),
        );
        let expected = request.expected_completions();
        let completions = self.gateway.complete(&request).await?;

        if completions.len() != expected {
            return Err(GenerationFailure::CountMismatch {
                expected,
                actual: completions.len(),
            });
        }
        Ok(completions)
    }

    /// Ask for an assessment of each response, one request per item
    async fn enrich(
        &self,
        items: &mut [FeedbackItem],
        progress: &dyn ProgressNotifier,
    ) -> Result<(), GenerationFailure> {
        progress.on_stage_start(Stage::Enrichment, items.len());

        for item in items.iter_mut() {
            let prompt = FeedbackPrompt::assessment(&item.response);
            match self.request_batch(vec![prompt]).await {
                Ok(mut completions) => {
                    progress.on_task_complete(Stage::Enrichment, true);
                    let text = completions.pop().unwrap_or_default();
                    item.assessment = Some(text.trim().to_string());
                }
                Err(e) => {
                    warn!("Response assessment failed: {}", e);
                    progress.on_task_complete(Stage::Enrichment, false);
                    progress.on_stage_complete(Stage::Enrichment, false);
                    return Err(e);
                }
            }
        }

        progress.on_stage_complete(Stage::Enrichment, true);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Gateway that records every request and replays scripted replies.
    pub(crate) struct MockGateway {
        pub(crate) requests: Mutex<Vec<CompletionRequest>>,
        replies: Mutex<VecDeque<Result<Vec<String>, GatewayError>>>,
    }

    impl MockGateway {
        pub(crate) fn new(replies: Vec<Result<Vec<String>, GatewayError>>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                replies: Mutex::new(VecDeque::from(replies)),
            }
        }

        /// Answers every request with one echo-style completion per prompt
        pub(crate) fn echoing() -> Self {
            Self::new(vec![])
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<Vec<String>, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.replies.lock().unwrap().pop_front() {
                Some(reply) => reply,
                None => Ok(request
                    .prompts
                    .iter()
                    .enumerate()
                    .map(|(i, _)| format!("  completion {}  ", i + 1))
                    .collect()),
            }
        }
    }

    pub(crate) fn three_questions() -> QuestionSet {
        QuestionSet::new(vec![
            "How have you been feeling lately?".to_string(),
            "Rate your stress level on a scale of 1-10:".to_string(),
            "What are the major challenges you are facing right now?".to_string(),
        ])
        .unwrap()
    }

    fn use_case(gateway: Arc<MockGateway>, enrich: bool) -> GenerateFeedbackUseCase {
        GenerateFeedbackUseCase::new(gateway, FeedbackParams::default().with_enrichment(enrich))
    }

    #[tokio::test]
    async fn test_no_answers_returns_sentinel_without_calling_gateway() {
        let gateway = Arc::new(MockGateway::echoing());
        let answers = AnswerSet::from_ordered("", ["", "", ""]);

        let items = use_case(gateway.clone(), false)
            .execute(&answers, &three_questions())
            .await
            .unwrap();

        assert_eq!(items, vec![FeedbackItem::no_response(false)]);
        assert_eq!(items[0].question, "No response provided.");
        assert_eq!(items[0].response, "");
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_all_answers_one_batch_in_order() {
        let gateway = Arc::new(MockGateway::echoing());
        let answers = AnswerSet::from_ordered("I feel great today", ["fine", "3", "work"]);

        let items = use_case(gateway.clone(), false)
            .execute(&answers, &three_questions())
            .await
            .unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].prompts,
            vec![
                "Question 1: How have you been feeling lately?\nResponse: fine",
                "Question 2: Rate your stress level on a scale of 1-10:\nResponse: 3",
                "Question 3: What are the major challenges you are facing right now?\nResponse: work",
            ]
        );
        assert_eq!(requests[0].sampling.temperature, 0.5);
        assert_eq!(requests[0].sampling.max_tokens, 100);

        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0].question,
            "Question 1: How have you been feeling lately?\nResponse: "
        );
        assert_eq!(items[0].response, "fine");
        assert_eq!(items[1].response, "3");
        assert_eq!(items[2].response, "work");
        assert_eq!(items[2].completion, "completion 3");
        assert!(items.iter().all(|i| i.assessment.is_none()));
    }

    #[tokio::test]
    async fn test_unanswered_questions_are_skipped() {
        let gateway = Arc::new(MockGateway::echoing());
        let answers = AnswerSet::new("meh").with_answer(1, "  ").with_answer(3, "family");

        let items = use_case(gateway.clone(), false)
            .execute(&answers, &three_questions())
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert!(items[0].question.starts_with("Question 3: "));
        assert_eq!(items[0].response, "family");
        assert_eq!(gateway.requests.lock().unwrap()[0].prompts.len(), 1);
    }

    #[tokio::test]
    async fn test_count_mismatch_fails_whole_call() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(vec![
            "one".to_string(),
            "two".to_string(),
        ])]));
        let answers = AnswerSet::from_ordered("ok", ["fine", "3", "work"]);

        let result = use_case(gateway, false)
            .execute(&answers, &three_questions())
            .await;

        assert!(matches!(
            result,
            Err(GenerationFailure::CountMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let answers = AnswerSet::from_ordered("ok", ["fine", "3", "work"]);

        let result = use_case(gateway, false)
            .execute(&answers, &three_questions())
            .await;

        assert!(matches!(
            result,
            Err(GenerationFailure::GatewayError(GatewayError::Timeout))
        ));
    }

    #[tokio::test]
    async fn test_enrichment_adds_assessment_per_item() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(vec!["fb1".to_string(), "fb2".to_string()]),
            Ok(vec!["  calm and steady \n".to_string()]),
            Ok(vec!["moderate stress".to_string()]),
        ]));
        let answers = AnswerSet::new("ok").with_answer(1, "fine").with_answer(2, "3");

        let items = use_case(gateway.clone(), true)
            .execute(&answers, &three_questions())
            .await
            .unwrap();

        assert_eq!(items[0].assessment.as_deref(), Some("calm and steady"));
        assert_eq!(items[1].assessment.as_deref(), Some("moderate stress"));

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[1].prompts,
            vec!["As a professional psychologist, based on the response: fine"]
        );
    }

    #[tokio::test]
    async fn test_enrichment_failure_fails_whole_call() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(vec!["fb1".to_string()]),
            Err(GatewayError::RequestFailed("500".to_string())),
        ]));
        let answers = AnswerSet::new("ok").with_answer(1, "fine");

        let result = use_case(gateway, true)
            .execute(&answers, &three_questions())
            .await;
        assert!(matches!(result, Err(GenerationFailure::GatewayError(_))));
    }

    #[tokio::test]
    async fn test_enriched_sentinel_has_placeholder_assessment() {
        let gateway = Arc::new(MockGateway::echoing());
        let items = use_case(gateway.clone(), true)
            .execute(&AnswerSet::default(), &three_questions())
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].assessment.as_deref(), Some("No assessment available."));
        assert_eq!(gateway.request_count(), 0);
    }
}
