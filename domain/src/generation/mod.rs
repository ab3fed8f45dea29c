//! Text generation requests.

pub mod request;

pub use request::{CompletionRequest, SamplingConfig};
