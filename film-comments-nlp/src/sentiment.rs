use {
    std::sync::Arc,
    serde::Serialize,
    crate::{
        lexicon::Lexicon,
        tokenization::valid_words,
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Share of lexicon hits on each side. `positive + negative == 1`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub positive: f64,
    pub negative: f64,
    #[serde(rename = "sentiment")]
    pub label: Polarity,
}

impl Sentiment {
    fn from_counts(positive_count: usize, negative_count: usize) -> Option<Self> {
        let total = positive_count + negative_count;
        if total == 0 {
            return None;
        }

        let positive = positive_count as f64 / total as f64;
        let negative = 1.0 - positive;
        // equal shares count as negative
        let label = if positive > negative { Polarity::Positive } else { Polarity::Negative };

        Some(Self {
            positive,
            negative,
            label,
        })
    }

    pub fn is_positive(&self) -> bool {
        self.label == Polarity::Positive
    }
}

/// Lexicon hit counter. Stop words are not removed here: intensifiers such
/// as "çok" are both stop words and positive entries.
#[derive(Clone, Debug)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
        }
    }

    /// `None` when the text has no valid words or no lexicon hits.
    pub fn score(&self, normalized: &str) -> Option<Sentiment> {
        let mut positive_count = 0;
        let mut negative_count = 0;

        for word in valid_words(normalized) {
            if self.lexicon.is_positive(word) {
                positive_count += 1;
            }
            if self.lexicon.is_negative(word) {
                negative_count += 1;
            }
        }

        Sentiment::from_counts(positive_count, negative_count)
    }
}
