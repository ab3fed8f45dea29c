//! Application-level configuration.
//!
//! - [`FeedbackParams`] — model, sampling and enrichment settings for feedback generation

pub mod feedback_params;

pub use feedback_params::FeedbackParams;
