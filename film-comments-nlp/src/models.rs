use {
    serde::Serialize,
    crate::keywords::KeywordCount,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

/// Structured result of an analysis request, serialized as the process output.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<CommentAnalysis>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CommentAnalysis {
    pub total_comments: usize,
    pub positive_comments: usize,
    pub negative_comments: usize,
    pub positive_ratio: f64,
    pub keywords: Vec<KeywordCount>,
    pub sentiment_distribution: SentimentDistribution,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
}

impl AnalysisReport {
    pub fn success(message: impl Into<String>, analysis: CommentAnalysis) -> Self {
        Self::new(Status::Success, message.into(), Some(analysis))
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Status::Warning, message.into(), None)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message.into(), None)
    }

    fn new(status: Status, message: String, analysis: Option<CommentAnalysis>) -> Self {
        Self {
            status,
            message,
            comment_count: None,
            analysis,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_comment_count(mut self, comment_count: usize) -> Self {
        self.comment_count = Some(comment_count);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|err| format!(r#"{{"status":"error","message":"failed to serialize report: {}"}}"#, err))
    }
}

impl CommentAnalysis {
    pub fn new(positive_comments: usize, negative_comments: usize, keywords: Vec<KeywordCount>) -> Self {
        let total_comments = positive_comments + negative_comments;
        let positive_ratio = if total_comments == 0 {
            0.0
        } else {
            positive_comments as f64 / total_comments as f64
        };

        Self {
            total_comments,
            positive_comments,
            negative_comments,
            positive_ratio,
            keywords,
            sentiment_distribution: SentimentDistribution {
                positive: positive_comments,
                negative: negative_comments,
            },
        }
    }
}
