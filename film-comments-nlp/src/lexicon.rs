use {
    std::{collections::HashSet, sync::Arc},
    once_cell::sync::Lazy,
    tracing::debug,
};

const TURKISH_POSITIVE_WORDS: &[&str] = &[
    "harika", "mükemmel", "güzel", "iyi", "süper", "muhteşem", "etkileyici",
    "başarılı", "tavsiye", "beğendim", "sevdiğim", "hoş", "kaliteli",
    "öneririm", "öneriyorum", "tavsiye ederim", "tavsiye ediyorum",
    "çok", "gerçekten", "kesinlikle", "mutlaka", "kesin", "tam", "tamamen",
    "müthiş", "olağanüstü", "fevkalade",
    "hoşuma gitti", "çok beğendim", "çok sevdim",
];

const TURKISH_NEGATIVE_WORDS: &[&str] = &[
    "kötü", "berbat", "rezil", "vasat", "sıkıcı", "beğenmedim",
    "sevmedim", "hoş değil", "kalitesiz", "önermem", "önerilmez",
    "tavsiye etmem", "tavsiye etmiyorum", "hayal kırıklığı",
    "hoşuma gitmedi",
];

const TURKISH_STOP_WORDS: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey",
    "biz", "bu", "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en",
    "gibi", "hem", "hep", "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki",
    "kim", "mı", "mu", "mü", "nasıl", "ne", "neden", "nerde", "nerede", "nereye",
    "niçin", "niye", "o", "sanki", "şey", "siz", "şu", "tüm", "ve", "veya", "ya",
    "yani",
];

static TURKISH: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let lexicon = Lexicon::turkish();
    debug!(
        "turkish lexicon loaded: {} positive, {} negative, {} stop words, unreachable entries: {:?}",
        lexicon.positive.len(),
        lexicon.negative.len(),
        lexicon.stop_words.len(),
        lexicon.unreachable_entries(),
    );
    Arc::new(lexicon)
});

/// Read-only word tables shared by every analyzer in the process.
///
/// Sentiment lookups are single-token membership tests. Entries containing
/// whitespace (`"tavsiye ederim"`) are kept as loaded but can never match,
/// see [`Lexicon::unreachable_entries`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    stop_words: HashSet<String>,
}

impl Lexicon {
    pub fn new<P, N, S>(positive: P, negative: N, stop_words: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn turkish() -> Self {
        Self::new(
            TURKISH_POSITIVE_WORDS.iter().copied(),
            TURKISH_NEGATIVE_WORDS.iter().copied(),
            TURKISH_STOP_WORDS.iter().copied(),
        )
    }

    /// The process-wide Turkish tables, built on first use.
    pub fn shared_turkish() -> Arc<Lexicon> {
        TURKISH.clone()
    }

    pub fn with_additions(mut self, positive: &[String], negative: &[String], stop_words: &[String]) -> Self {
        self.positive.extend(positive.iter().cloned());
        self.negative.extend(negative.iter().cloned());
        self.stop_words.extend(stop_words.iter().cloned());
        self
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Sentiment entries that whitespace tokenization can never produce.
    pub fn unreachable_entries(&self) -> Vec<&str> {
        let mut entries: Vec<&str> = self.positive.iter()
            .chain(self.negative.iter())
            .filter(|entry| entry.chars().any(char::is_whitespace))
            .map(|entry| entry.as_str())
            .collect();

        entries.sort_unstable();
        entries.dedup();
        entries
    }
}
