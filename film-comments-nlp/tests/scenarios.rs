use film_comments_nlp::{
    analyzer::{NO_COMMENTS_MESSAGE, NO_VALID_COMMENTS_MESSAGE},
    keywords::{extract_keywords, KeywordCount},
    normalization::TextNormalizer,
    tokenization::WordFilter,
    CommentAnalyzer,
    Lexicon,
    Status,
};

const BATCHES: &[&[&str]] = &[
    &["Bu film harika, çok beğendim!", "Berbat bir film, hiç sevmedim."],
    &["İyi ama kötü", "MÜKEMMEL!!!", "vasat... sıkıcı...", "dün izledim"],
    &["...", "??", "123"],
    &["bu ve ile", "gerçekten kesinlikle tam tamamen kötü"],
    &[],
];

#[test]
fn scenario_a_one_positive_one_negative() {
    let report = CommentAnalyzer::default().analyze_comments(BATCHES[0]);

    assert_eq!(report.status, Status::Success);
    let analysis = report.analysis.unwrap();
    assert_eq!(analysis.total_comments, 2);
    assert_eq!(analysis.positive_comments, 1);
    assert_eq!(analysis.negative_comments, 1);
    assert_eq!(analysis.positive_ratio, 0.5);
    assert_eq!(analysis.sentiment_distribution.positive, 1);
    assert_eq!(analysis.sentiment_distribution.negative, 1);
    assert_eq!(analysis.keywords, vec![KeywordCount { word: "film".to_owned(), count: 2 }]);
}

#[test]
fn scenario_b_noise_only_batch_is_warning() {
    let report = CommentAnalyzer::default().analyze_comments(BATCHES[2]);

    assert_eq!(report.status, Status::Warning);
    assert_eq!(report.message, NO_VALID_COMMENTS_MESSAGE);
    assert!(report.analysis.is_none());
}

#[test]
fn scenario_c_empty_batch_is_distinct_warning() {
    let report = CommentAnalyzer::default().analyze_comments::<&str>(&[]);

    assert_eq!(report.status, Status::Warning);
    assert_eq!(report.message, NO_COMMENTS_MESSAGE);
    assert_ne!(NO_COMMENTS_MESSAGE, NO_VALID_COMMENTS_MESSAGE);
    assert!(report.analysis.is_none());
}

#[test]
fn scenario_d_stop_words_only_comment_is_skipped() {
    let report = CommentAnalyzer::default().analyze_comments(&["bu ve ile", "harika"]);
    let analysis = report.analysis.unwrap();

    assert_eq!(analysis.total_comments, 1);
    assert_eq!(analysis.positive_comments, 1);
}

#[test]
fn scenario_e_repeated_word_across_comments() {
    let report = CommentAnalyzer::default().analyze_comments(&["Film güzel, film harika.", "Berbat film!"]);
    let analysis = report.analysis.unwrap();

    assert_eq!(analysis.keywords[0], KeywordCount { word: "film".to_owned(), count: 3 });
}

#[test]
fn counts_always_add_up() {
    let analyzer = CommentAnalyzer::default();

    for batch in BATCHES {
        let report = analyzer.analyze_comments(*batch);
        match report.analysis {
            Some(analysis) => {
                assert_eq!(report.status, Status::Success);
                assert_eq!(analysis.positive_comments + analysis.negative_comments, analysis.total_comments);
                assert!(analysis.total_comments > 0);
                assert!((0.0..=1.0).contains(&analysis.positive_ratio));
            }
            None => assert_eq!(report.status, Status::Warning),
        }
    }
}

#[test]
fn mixed_batch_counts() {
    let analysis = CommentAnalyzer::default().analyze_comments(BATCHES[1]).analysis.unwrap();

    // tie, positive, negative; the last comment has no signal
    assert_eq!(analysis.total_comments, 3);
    assert_eq!(analysis.positive_comments, 1);
    assert_eq!(analysis.negative_comments, 2);
}

#[test]
fn normalizer_is_idempotent_over_batches() {
    let normalizer = TextNormalizer::default();

    for comment in BATCHES.iter().flat_map(|batch| batch.iter()) {
        let once = normalizer.normalize(comment);
        assert_eq!(normalizer.normalize(&once), once);
    }
}

#[test]
fn tokenizer_output_respects_filters() {
    let lexicon = Lexicon::shared_turkish();
    let normalizer = TextNormalizer::default();
    let filter = WordFilter::new(lexicon.clone());

    for comment in BATCHES.iter().flat_map(|batch| batch.iter()) {
        for token in filter.tokenize_and_filter(&normalizer.normalize(comment)) {
            assert!(token.chars().count() >= 2);
            assert!(!token.chars().any(|c| c.is_numeric()));
            assert!(!lexicon.is_stop_word(&token));
        }
    }
}

#[test]
fn keyword_extractor_bounds() {
    let tokens = ["aa", "bb", "aa", "cc", "bb", "dd", "aa", "ee", "ff", "ee", "cc", "gg", "gg", "hh"];

    for top_n in 0..6 {
        for min_frequency in 1..4 {
            let keywords = extract_keywords(&tokens, top_n, min_frequency);
            assert!(keywords.len() <= top_n);
            assert!(keywords.iter().all(|keyword| keyword.count >= min_frequency));
        }
    }
}

#[test]
fn report_json_shape() {
    let json = serde_json::to_value(CommentAnalyzer::default().analyze_comments(BATCHES[0])).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["analysis"]["positive_ratio"], 0.5);
    assert_eq!(json["analysis"]["keywords"][0]["word"], "film");
    assert_eq!(json["analysis"]["sentiment_distribution"]["negative"], 1);
    assert!(json.get("movie").is_none());
}
