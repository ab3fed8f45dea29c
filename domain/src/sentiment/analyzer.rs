//! Polarity scoring and classification

use super::label::Sentiment;
use super::lexicon;

/// Scores text polarity in `[-1.0, 1.0]`.
///
/// Implementations must be pure and must not fail: any input, including the
/// empty string, yields a score.
pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity of `text`; `0.0` when nothing in it carries sentiment
    fn polarity(&self, text: &str) -> f64;

    /// Classify `text` into one of the three sentiment labels
    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

/// Lexicon-based analyzer.
///
/// Averages the polarity of every sentiment word in the text. An intensifier
/// directly before a word scales it; a negation within the two preceding
/// tokens flips and halves it ("not good" scores -0.35).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

/// How far back a negation still applies
const NEGATION_WINDOW: usize = 2;

/// Scale applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase().replace('’', "'"))
        .collect()
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut scores = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut score) = lexicon::polarity(token) else {
                continue;
            };

            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| lexicon::intensity(&tokens[prev]))
            {
                score *= factor;
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| lexicon::is_negation(t)) {
                score *= NEGATION_FACTOR;
            }

            scores.push(score.clamp(-1.0, 1.0));
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Sentiment {
        LexiconAnalyzer.classify(text)
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(LexiconAnalyzer.polarity(""), 0.0);
        assert_eq!(classify(""), Sentiment::Neutral);
        assert_eq!(classify("   \n"), Sentiment::Neutral);
    }

    #[test]
    fn test_text_without_sentiment_words_is_neutral() {
        assert_eq!(classify("I went to work on Tuesday"), Sentiment::Neutral);
    }

    #[test]
    fn test_positive_and_negative_sentences() {
        assert_eq!(classify("I feel great today"), Sentiment::Positive);
        assert_eq!(classify("Everything is terrible and I am tired"), Sentiment::Negative);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert_eq!(classify("I am not happy"), Sentiment::Negative);
        assert_eq!(classify("I don't feel bad"), Sentiment::Positive);
        assert!((LexiconAnalyzer.polarity("not good") - -0.35).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let plain = LexiconAnalyzer.polarity("good");
        let strong = LexiconAnalyzer.polarity("very good");
        assert!(strong > plain);
        assert_eq!(LexiconAnalyzer.polarity("extremely awesome"), 1.0);
    }

    #[test]
    fn test_mixed_text_averages() {
        // great (0.8) and sad (-0.5) average to 0.15
        let score = LexiconAnalyzer.polarity("Great job but a sad week");
        assert!((score - 0.15).abs() < 1e-9);
        assert_eq!(classify("Great job but a sad week"), Sentiment::Positive);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Work has been stressful but my family is lovely";
        assert_eq!(classify(text), classify(text));
        assert_eq!(
            LexiconAnalyzer.polarity(text),
            LexiconAnalyzer.polarity(text)
        );
    }

    #[test]
    fn test_curly_apostrophe_negation() {
        assert_eq!(classify("I can’t be happy"), Sentiment::Negative);
    }
}
