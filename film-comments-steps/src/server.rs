use {
    std::sync::Arc,
    axum::{
        extract::{Path, State},
        http::StatusCode,
        response::Json,
        routing::get,
        Router,
    },
    tower_http::{cors::CorsLayer, trace::TraceLayer},
    tracing::{info, warn},
    film_comments_core::{
        config::Config,
        database::Database,
        tmdb::Tmdb,
    },
    film_comments_nlp::{AnalysisReport, CommentAnalyzer, Status},
    crate::analyze::{analyze_movie, parse_movie_id_value, MovieAnalysisReport},
};

pub const RUNNING_MESSAGE: &str = "comment analyzer is running";

pub struct AppState {
    database: Database,
    tmdb: Tmdb,
    analyzer: CommentAnalyzer,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            database: Database::connect_lazy(config.infra().database())?,
            tmdb: Tmdb::new(&config.infra().tmdb()),
            analyzer: CommentAnalyzer::from_config(&config.analyzer),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(running))
        .route("/api/analyzer/analyze/:movie_id", get(analyze))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve_analyzer_step(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let bind_address = config.server().bind_address();

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("comment analyzer listening on {}", bind_address);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn running() -> &'static str {
    RUNNING_MESSAGE
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> (StatusCode, Json<MovieAnalysisReport>) {
    let movie_id = match parse_movie_id_value(&movie_id) {
        Ok(v) => v,
        Err(err) => {
            warn!("bad request: {}", err);
            return (StatusCode::BAD_REQUEST, Json(AnalysisReport::error(err.to_string()).into()));
        }
    };

    let report = analyze_movie(&state.database, &state.tmdb, &state.analyzer, movie_id).await;
    (status_code_for(&report.report), Json(report))
}

fn status_code_for(report: &AnalysisReport) -> StatusCode {
    match report.status {
        Status::Error => StatusCode::INTERNAL_SERVER_ERROR,
        Status::Success | Status::Warning => StatusCode::OK,
    }
}
