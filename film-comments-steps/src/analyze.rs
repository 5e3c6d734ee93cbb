use {
    serde::Serialize,
    tracing::{info, error},
    film_comments_core::{
        config::Config,
        database::Database,
        entity::MovieMetadata,
        tmdb::Tmdb,
    },
    film_comments_nlp::{AnalysisReport, CommentAnalyzer},
    crate::error::InvocationError,
};

pub const NO_STORED_COMMENTS_MESSAGE: &str = "there are no comments for this movie yet";

/// Analysis report with the movie's metadata, when it could be looked up.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MovieAnalysisReport {
    #[serde(flatten)]
    pub report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieMetadata>,
}

impl MovieAnalysisReport {
    pub fn with_movie(mut self, movie: Option<MovieMetadata>) -> Self {
        self.movie = movie;
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| self.report.to_json())
    }
}

impl From<AnalysisReport> for MovieAnalysisReport {
    fn from(report: AnalysisReport) -> Self {
        Self {
            report,
            movie: None,
        }
    }
}

/// Exactly one argument (after the program name), parsed as an integer id.
pub fn parse_movie_id<I: IntoIterator<Item = String>>(args: I) -> Result<i64, InvocationError> {
    let args: Vec<String> = args.into_iter().skip(1).collect();
    if args.len() != 1 {
        return Err(InvocationError::MissingMovieId);
    }

    parse_movie_id_value(&args[0])
}

pub fn parse_movie_id_value(raw: &str) -> Result<i64, InvocationError> {
    let raw = raw.trim();
    raw.parse().map_err(|_| InvocationError::InvalidMovieId(raw.to_owned()))
}

pub async fn analyze_movie_step(config: &Config, movie_id: i64) -> MovieAnalysisReport {
    let database = match Database::new(config.infra().database()).await {
        Ok(v) => v,
        Err(err) => return failed_report(movie_id, err),
    };

    let tmdb = Tmdb::new(&config.infra().tmdb());
    let analyzer = CommentAnalyzer::from_config(&config.analyzer);

    analyze_movie(&database, &tmdb, &analyzer, movie_id).await
}

pub async fn analyze_movie(database: &Database, tmdb: &Tmdb, analyzer: &CommentAnalyzer, movie_id: i64) -> MovieAnalysisReport {
    info!("analyzing comments for movie {}", movie_id);

    let comments = match database.comments_for_movie(movie_id).await {
        Ok(v) => v,
        Err(err) => return failed_report(movie_id, err),
    };

    let report = report_for_comments(analyzer, &comments);
    if !report.is_success() {
        return report.into();
    }

    let movie = tmdb.movie_or_unavailable(movie_id).await;
    MovieAnalysisReport::from(report).with_movie(movie)
}

fn failed_report(movie_id: i64, err: anyhow::Error) -> MovieAnalysisReport {
    error!("failed to fetch comments for movie {}: {:?}", movie_id, err);
    AnalysisReport::error(format!("failed to analyze comments: {}", err)).into()
}

pub fn report_for_comments(analyzer: &CommentAnalyzer, comments: &[String]) -> AnalysisReport {
    if comments.is_empty() {
        return AnalysisReport::warning(NO_STORED_COMMENTS_MESSAGE);
    }

    let report = analyzer.analyze_comments(comments);
    if !report.is_success() {
        return report;
    }

    report
        .with_message(format!("comments analyzed successfully, {} comments found", comments.len()))
        .with_comment_count(comments.len())
}
