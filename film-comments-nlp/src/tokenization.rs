use {
    std::sync::Arc,
    crate::lexicon::Lexicon,
};

pub const MIN_WORD_LENGTH: usize = 2;

/// A word worth keeping: at least two characters, letters only.
///
/// The digit check overlaps the alphabetic one but is kept separate so
/// mixed-script input is judged by both rules.
pub fn is_valid_word(word: &str) -> bool {
    if word.chars().count() < MIN_WORD_LENGTH {
        return false;
    }

    if !word.chars().all(char::is_alphabetic) {
        return false;
    }

    if word.chars().any(char::is_numeric) {
        return false;
    }

    true
}

/// Valid words of already normalized text, in order, duplicates kept.
pub fn valid_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace().filter(|word| is_valid_word(word))
}

/// Splits normalized text into keyword candidates, dropping stop words.
#[derive(Clone, Debug)]
pub struct WordFilter {
    lexicon: Arc<Lexicon>,
}

impl WordFilter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
        }
    }

    pub fn tokenize_and_filter(&self, normalized: &str) -> Vec<String> {
        valid_words(normalized)
            .filter(|word| !self.lexicon.is_stop_word(word))
            .map(|word| word.to_owned())
            .collect()
    }
}
