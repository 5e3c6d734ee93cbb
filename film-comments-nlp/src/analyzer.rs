use {
    std::sync::Arc,
    tracing::{debug, info},
    crate::{
        config::{AnalyzerConfig, KeywordPool},
        keywords::extract_keywords,
        lexicon::Lexicon,
        models::{AnalysisReport, CommentAnalysis},
        normalization::{NormalizerConfig, TextNormalizer},
        sentiment::{Sentiment, SentimentScorer},
        tokenization::WordFilter,
    },
};

pub const NO_COMMENTS_MESSAGE: &str = "no comments to analyze";
pub const NO_VALID_COMMENTS_MESSAGE: &str = "no valid comments could be analyzed";

/// Per-comment result before anything is committed to the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentEvaluation {
    pub tokens: Vec<String>,
    pub sentiment: Option<Sentiment>,
}

impl CommentEvaluation {
    pub fn is_counted(&self) -> bool {
        !self.tokens.is_empty() && self.sentiment.is_some()
    }
}

/// Runs the normalize, filter, score pipeline over a batch of comments and
/// folds the results into a report. Holds no state between batches.
#[derive(Clone, Debug)]
pub struct CommentAnalyzer {
    normalizer: TextNormalizer,
    word_filter: WordFilter,
    scorer: SentimentScorer,
    top_keywords: usize,
    min_keyword_frequency: usize,
    keyword_pool: KeywordPool,
}

impl CommentAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>, config: &AnalyzerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(NormalizerConfig {
                turkish_casing: config.turkish_casing,
            }),
            word_filter: WordFilter::new(lexicon.clone()),
            scorer: SentimentScorer::new(lexicon),
            top_keywords: config.top_keywords,
            min_keyword_frequency: config.min_keyword_frequency,
            keyword_pool: config.keyword_pool,
        }
    }

    /// Shares the process-wide lexicon unless the config adds words to it.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let lexicon = if config.has_lexicon_additions() {
            Arc::new(Lexicon::turkish().with_additions(
                &config.extra_positive_words,
                &config.extra_negative_words,
                &config.extra_stop_words,
            ))
        } else {
            Lexicon::shared_turkish()
        };

        Self::new(lexicon, config)
    }

    pub fn evaluate(&self, comment: &str) -> CommentEvaluation {
        let normalized = self.normalizer.normalize(comment);
        let tokens = self.word_filter.tokenize_and_filter(&normalized);

        // a comment without tokens is skipped before it is scored
        let sentiment = if tokens.is_empty() {
            None
        } else {
            self.scorer.score(&normalized)
        };

        CommentEvaluation {
            tokens,
            sentiment,
        }
    }

    pub fn analyze_comments<S: AsRef<str>>(&self, comments: &[S]) -> AnalysisReport {
        if comments.is_empty() {
            return AnalysisReport::warning(NO_COMMENTS_MESSAGE);
        }

        let mut keyword_pool: Vec<String> = Vec::new();
        let mut sentiments: Vec<Sentiment> = Vec::new();

        for (index, comment) in comments.iter().enumerate() {
            let evaluation = self.evaluate(comment.as_ref());

            if evaluation.tokens.is_empty() {
                debug!("skipping comment {}: no valid words", index);
                continue;
            }

            let counted = evaluation.is_counted();
            let CommentEvaluation { tokens, sentiment } = evaluation;

            if counted || self.keyword_pool == KeywordPool::Tokenized {
                keyword_pool.extend(tokens);
            }

            match sentiment {
                Some(v) if counted => sentiments.push(v),
                _ => debug!("skipping comment {}: no sentiment signal", index),
            }
        }

        let valid_comments = sentiments.len();
        if valid_comments == 0 {
            return AnalysisReport::warning(NO_VALID_COMMENTS_MESSAGE);
        }

        let positive_comments = sentiments.iter().filter(|v| v.is_positive()).count();
        let negative_comments = valid_comments - positive_comments;
        let keywords = extract_keywords(&keyword_pool, self.top_keywords, self.min_keyword_frequency);

        info!(
            "analyzed {} of {} comments: {} positive, {} negative",
            valid_comments,
            comments.len(),
            positive_comments,
            negative_comments,
        );

        AnalysisReport::success(
            format!("comment analysis completed, {} valid comments analyzed", valid_comments),
            CommentAnalysis::new(positive_comments, negative_comments, keywords),
        )
    }
}

impl Default for CommentAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::shared_turkish(), &AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{keywords::KeywordCount, models::Status, sentiment::Polarity},
    };

    fn analyzer_with_pool(keyword_pool: KeywordPool) -> CommentAnalyzer {
        CommentAnalyzer::from_config(&AnalyzerConfig {
            keyword_pool,
            ..AnalyzerConfig::default()
        })
    }

    #[test]
    fn evaluation_of_counted_comment() {
        let evaluation = CommentAnalyzer::default().evaluate("Bu film harika, çok beğendim!");

        assert_eq!(evaluation.tokens, vec!["film", "harika", "beğendim"]);
        assert_eq!(evaluation.sentiment.map(|v| v.label), Some(Polarity::Positive));
        assert!(evaluation.is_counted());
    }

    #[test]
    fn evaluation_without_tokens_is_not_scored() {
        // "çok" is a positive entry but also a stop word
        let evaluation = CommentAnalyzer::default().evaluate("çok çok");

        assert!(evaluation.tokens.is_empty());
        assert!(evaluation.sentiment.is_none());
        assert!(!evaluation.is_counted());
    }

    #[test]
    fn evaluation_without_signal_keeps_tokens() {
        let evaluation = CommentAnalyzer::default().evaluate("dün film izledim");

        assert_eq!(evaluation.tokens, vec!["dün", "film", "izledim"]);
        assert!(evaluation.sentiment.is_none());
        assert!(!evaluation.is_counted());
    }

    #[test]
    fn scored_pool_ignores_unscored_comments() {
        let comments = ["film harika", "film izledim", "film izledim", "film güzel"];
        let report = analyzer_with_pool(KeywordPool::Scored).analyze_comments(&comments);
        let analysis = report.analysis.unwrap();

        assert_eq!(analysis.total_comments, 2);
        assert_eq!(analysis.keywords, vec![KeywordCount { word: "film".to_owned(), count: 2 }]);
    }

    #[test]
    fn tokenized_pool_includes_unscored_comments() {
        let comments = ["film harika", "film izledim", "film izledim", "film güzel"];
        let report = analyzer_with_pool(KeywordPool::Tokenized).analyze_comments(&comments);
        let analysis = report.analysis.unwrap();

        assert_eq!(analysis.total_comments, 2);
        assert_eq!(analysis.keywords, vec![
            KeywordCount { word: "film".to_owned(), count: 4 },
            KeywordCount { word: "izledim".to_owned(), count: 2 },
        ]);
    }

    #[test]
    fn default_pool_keeps_keywords_of_unscored_comments() {
        let report = CommentAnalyzer::default().analyze_comments(&["film harika", "film izledim", "film izledim"]);
        let analysis = report.analysis.unwrap();

        assert_eq!(analysis.total_comments, 1);
        assert_eq!(analysis.keywords, vec![
            KeywordCount { word: "film".to_owned(), count: 3 },
            KeywordCount { word: "izledim".to_owned(), count: 2 },
        ]);
    }

    #[test]
    fn success_message_names_valid_count() {
        let report = CommentAnalyzer::default().analyze_comments(&["harika", "123", "berbat"]);

        assert_eq!(report.status, Status::Success);
        assert_eq!(report.message, "comment analysis completed, 2 valid comments analyzed");
        assert!(report.comment_count.is_none());
    }

    #[test]
    fn configured_stop_words_apply() {
        let analyzer = CommentAnalyzer::from_config(&AnalyzerConfig {
            extra_stop_words: vec!["film".to_owned()],
            ..AnalyzerConfig::default()
        });

        let report = analyzer.analyze_comments(&["film harika", "film güzel", "film iyi"]);
        assert!(report.analysis.unwrap().keywords.is_empty());
    }

    #[test]
    fn configured_sentiment_words_apply() {
        let analyzer = CommentAnalyzer::from_config(&AnalyzerConfig {
            extra_negative_words: vec!["sıradan".to_owned()],
            ..AnalyzerConfig::default()
        });

        let report = analyzer.analyze_comments(&["sıradan bir yapım"]);
        assert_eq!(report.analysis.unwrap().negative_comments, 1);
    }

    #[test]
    fn configured_keyword_limits_apply() {
        let analyzer = CommentAnalyzer::from_config(&AnalyzerConfig {
            top_keywords: 1,
            min_keyword_frequency: 1,
            ..AnalyzerConfig::default()
        });

        let report = analyzer.analyze_comments(&["senaryo harika", "oyuncular harika"]);
        assert_eq!(report.analysis.unwrap().keywords, vec![KeywordCount { word: "harika".to_owned(), count: 2 }]);
    }
}
