//! Word-level polarity, intensity and negation tables.
//!
//! Scores follow the usual adjective-lexicon scale: -1.0 (most negative) to
//! 1.0 (most positive). The vocabulary leans towards words people use when
//! describing mood, stress and day-to-day challenges.

/// Polarity of a single lowercase word, if it carries sentiment
pub fn polarity(word: &str) -> Option<f64> {
    let score = match word {
        // positive
        "amazing" => 0.6,
        "awesome" => 1.0,
        "beautiful" => 0.85,
        "best" => 1.0,
        "better" => 0.5,
        "brilliant" => 0.9,
        "calm" => 0.3,
        "cheerful" => 0.8,
        "comfortable" => 0.4,
        "confident" => 0.5,
        "content" => 0.3,
        "delighted" => 0.7,
        "energetic" => 0.4,
        "enjoy" | "enjoying" => 0.4,
        "excellent" => 1.0,
        "excited" => 0.375,
        "fantastic" => 0.4,
        "fine" => 0.4167,
        "fun" => 0.3,
        "glad" => 0.5,
        "good" => 0.7,
        "grateful" => 0.6,
        "great" => 0.8,
        "happy" => 0.8,
        "healthy" => 0.5,
        "hopeful" => 0.5,
        "improving" => 0.3,
        "joy" | "joyful" => 0.8,
        "love" | "loved" | "lovely" => 0.5,
        "motivated" => 0.4,
        "nice" => 0.6,
        "ok" | "okay" => 0.5,
        "optimistic" => 0.5,
        "peaceful" => 0.5,
        "perfect" => 1.0,
        "pleasant" => 0.7333,
        "positive" => 0.2273,
        "productive" => 0.4,
        "proud" => 0.8,
        "relaxed" => 0.4,
        "relieved" => 0.4,
        "rested" => 0.3,
        "safe" => 0.5,
        "satisfied" => 0.5,
        "strong" => 0.4333,
        "supported" => 0.4,
        "thankful" => 0.6,
        "well" => 0.3,
        "wonderful" => 1.0,
        // negative
        "afraid" => -0.6,
        "alone" => -0.3,
        "angry" => -0.5,
        "annoyed" => -0.4,
        "anxious" => -0.25,
        "awful" => -1.0,
        "bad" => -0.7,
        "bored" => -0.5,
        "broken" => -0.4,
        "burned" | "burnt" => -0.3,
        "confused" => -0.4,
        "depressed" => -0.6,
        "difficult" => -0.5,
        "disappointed" => -0.75,
        "down" => -0.1556,
        "drained" => -0.5,
        "exhausted" => -0.4,
        "frustrated" => -0.7,
        "hard" => -0.2917,
        "hopeless" => -0.6,
        "horrible" => -1.0,
        "hurt" => -0.5,
        "isolated" => -0.5,
        "lonely" => -0.3,
        "lost" => -0.3,
        "miserable" => -1.0,
        "nervous" => -0.2,
        "overwhelmed" => -0.5,
        "overwhelming" => -0.4,
        "pain" | "painful" => -0.7,
        "poor" => -0.4,
        "sad" => -0.5,
        "scared" => -0.5,
        "sick" => -0.7143,
        "stressed" => -0.5,
        "stressful" => -0.5,
        "struggling" => -0.4,
        "terrible" => -1.0,
        "tired" => -0.4,
        "tough" => -0.3889,
        "unhappy" => -0.6,
        "upset" => -0.5,
        "worried" => -0.5,
        "worse" => -0.4,
        "worst" => -1.0,
        "worthless" => -0.8,
        _ => return None,
    };
    Some(score)
}

/// Multiplier applied to the next sentiment word
pub fn intensity(word: &str) -> Option<f64> {
    let factor = match word {
        "very" | "really" | "so" | "truly" => 1.3,
        "extremely" | "incredibly" | "totally" => 1.5,
        "quite" | "pretty" => 1.1,
        "slightly" | "somewhat" | "kinda" | "bit" => 0.6,
        _ => return None,
    };
    Some(factor)
}

/// True for words that flip the following sentiment word
pub fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "hardly" | "barely" | "nothing")
        || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words() {
        assert_eq!(polarity("great"), Some(0.8));
        assert_eq!(polarity("terrible"), Some(-1.0));
        assert_eq!(polarity("today"), None);
    }

    #[test]
    fn test_all_scores_in_range() {
        for word in ["awesome", "best", "worst", "awful", "fine", "down"] {
            let score = polarity(word).unwrap();
            assert!((-1.0..=1.0).contains(&score), "{} out of range", word);
        }
    }

    #[test]
    fn test_negations() {
        assert!(is_negation("not"));
        assert!(is_negation("don't"));
        assert!(is_negation("isn't"));
        assert!(!is_negation("note"));
    }

    #[test]
    fn test_intensifiers() {
        assert_eq!(intensity("very"), Some(1.3));
        assert_eq!(intensity("feel"), None);
    }
}
