//! Prompt construction for the completion service.

pub mod template;

pub use template::{FeedbackPrompt, RESPONSE_MARKER};
