//! Lexicon-based analysis of movie comments: normalization, word
//! filtering, sentiment scoring, keyword extraction and batch reports.

pub mod analyzer;
pub mod config;
pub mod keywords;
pub mod lexicon;
pub mod models;
pub mod normalization;
pub mod sentiment;
pub mod tokenization;

pub use {
    analyzer::{CommentAnalyzer, CommentEvaluation},
    config::{AnalyzerConfig, KeywordPool},
    lexicon::Lexicon,
    models::{AnalysisReport, CommentAnalysis, SentimentDistribution, Status},
};
