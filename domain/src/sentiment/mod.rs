//! Sentiment classification of the free-text survey response.
//!
//! [`SentimentAnalyzer`] scores text; [`Sentiment`] is the three-way label
//! and owns the fixed verdict narrative for each label.

pub mod analyzer;
pub mod label;
pub mod lexicon;

pub use analyzer::{LexiconAnalyzer, SentimentAnalyzer};
pub use label::Sentiment;
