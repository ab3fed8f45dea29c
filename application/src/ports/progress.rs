//! Progress notification port
//!
//! Defines the interface for reporting progress while a submission is
//! assessed and saved.

/// Steps of processing one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Classifying the free-text response
    Sentiment,
    /// Batched feedback request
    Feedback,
    /// Per-item assessment requests
    Enrichment,
    /// Writing the record to the survey store
    Saving,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Sentiment => "Analyzing sentiment",
            Stage::Feedback => "Generating feedback",
            Stage::Enrichment => "Assessing responses",
            Stage::Saving => "Saving survey",
        }
    }
}

/// Callback for progress updates during submission processing
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts; `total_tasks` is the number of requests
    /// the stage will make (0 for local work)
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called after each request within a stage
    fn on_task_complete(&self, _stage: Stage, _success: bool) {}

    /// Called when a stage finishes
    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
