//! Completion service adapter

mod openai;
mod wire;

pub use openai::OpenAiCompletionGateway;
