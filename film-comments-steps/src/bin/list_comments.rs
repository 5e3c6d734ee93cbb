use {
    std::process::ExitCode,
    tracing::{info, error},
    film_comments_core::config::Config,
    film_comments_steps::{
        listing::list_comments_step,
        utils::init_logging,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    info!("listing movie comments with tmdb metadata");

    let config = Config::load();
    match list_comments_step(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("failed to list comments: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
