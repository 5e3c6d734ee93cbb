use {
    std::process::ExitCode,
    tracing::error,
    film_comments_core::config::Config,
    film_comments_steps::{server::serve_analyzer_step, utils::init_logging},
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match serve_analyzer_step(&Config::load()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("comment analyzer server stopped: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
