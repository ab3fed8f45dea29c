//! Sentiment labels and the verdicts they select

use serde::{Deserialize, Serialize};

/// Overall sentiment of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

const POSITIVE_VERDICT: &str = "You seem to be doing well. Keep up the positive mindset!";

const NEGATIVE_VERDICT: &str = "It seems like you're going through a tough time. \
Consider seeking professional help or reaching out to a support network.";

const NEUTRAL_VERDICT: &str = "Your responses indicate a neutral sentiment. \
Take some time to reflect on your feelings and consider seeking support if needed.";

impl Sentiment {
    /// Label a polarity score: strictly above zero is positive, strictly
    /// below is negative, zero itself is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// The fixed narrative shown to a submitter with this sentiment
    pub fn verdict(&self) -> &'static str {
        match self {
            Sentiment::Positive => POSITIVE_VERDICT,
            Sentiment::Negative => NEGATIVE_VERDICT,
            Sentiment::Neutral => NEUTRAL_VERDICT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
