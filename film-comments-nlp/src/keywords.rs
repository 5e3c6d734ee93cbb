use {
    std::collections::HashMap,
    serde::Serialize,
};

pub const DEFAULT_TOP_KEYWORDS: usize = 5;
pub const DEFAULT_MIN_FREQUENCY: usize = 2;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent tokens, at most `top_n`, each seen at least `min_frequency`
/// times. Sorted by count descending; equal counts keep first-seen order.
pub fn extract_keywords<S: AsRef<str>>(tokens: &[S], top_n: usize, min_frequency: usize) -> Vec<KeywordCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match positions.get(token).copied() {
            Some(index) => counts[index].count += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push(KeywordCount {
                    word: token.to_owned(),
                    count: 1,
                });
            }
        }
    }

    counts.retain(|keyword| keyword.count >= min_frequency);
    // stable, so ties stay in encounter order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);

    counts
}
