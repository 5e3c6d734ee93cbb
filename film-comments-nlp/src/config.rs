use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub top_keywords: usize,
    pub min_keyword_frequency: usize,
    pub keyword_pool: KeywordPool,
    pub turkish_casing: bool,
    pub extra_positive_words: Vec<String>,
    pub extra_negative_words: Vec<String>,
    pub extra_stop_words: Vec<String>,
}

/// Which comments feed their tokens into the batch keyword pool.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPool {
    /// Every comment that yields tokens, sentiment or not.
    Tokenized,
    /// Only comments that are counted (tokens and a sentiment signal).
    Scored,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_keywords: 5,
            min_keyword_frequency: 2,
            keyword_pool: KeywordPool::Tokenized,
            turkish_casing: true,
            extra_positive_words: Vec::new(),
            extra_negative_words: Vec::new(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl Default for KeywordPool {
    fn default() -> Self {
        KeywordPool::Tokenized
    }
}

impl AnalyzerConfig {
    pub fn has_lexicon_additions(&self) -> bool {
        !self.extra_positive_words.is_empty()
            || !self.extra_negative_words.is_empty()
            || !self.extra_stop_words.is_empty()
    }
}
