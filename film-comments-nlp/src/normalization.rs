//! Comment text normalization.
//!
//! Produces the canonical form every later stage works on: lowercase,
//! punctuation replaced by spaces, single spaces between words, no leading
//! or trailing whitespace.

/// Repeated punctuation treated as noise. Punctuation stripping already
/// removes these, so the pass never changes a string it receives.
const NOISE_PATTERNS: &[&str] = &[
    "......", ".....", "....", "...", "..",
    "!!!!!", "!!!!", "!!!", "!!",
    "?????", "????", "???", "??",
];

#[derive(Clone, Copy, Debug)]
pub struct NormalizerConfig {
    /// Lowercase `I` to dotless `ı` and `İ` to `i`, as Turkish text expects.
    pub turkish_casing: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            turkish_casing: true,
        }
    }
}

/// Pure, infallible text normalizer.
///
/// ```
/// use film_comments_nlp::normalization::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  Bu film HARİKA,  çok beğendim!! "), "bu film harika çok beğendim");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
        }
    }

    pub fn normalize(&self, input: &str) -> String {
        let mut lowercased = String::with_capacity(input.len());
        for c in input.chars() {
            self.push_lowercase(c, &mut lowercased);
        }

        let mut stripped: String = lowercased.chars()
            .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
            .collect();

        for pattern in NOISE_PATTERNS {
            if stripped.contains(pattern) {
                stripped = stripped.replace(pattern, " ");
            }
        }

        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn push_lowercase(&self, c: char, out: &mut String) {
        match c {
            'I' if self.config.turkish_casing => out.push('ı'),
            // default casing gives "i" plus U+0307, which would split the word
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
}
