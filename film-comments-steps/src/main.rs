use {
    std::{env, process::ExitCode},
    tracing::warn,
    film_comments_core::config::Config,
    film_comments_nlp::AnalysisReport,
    film_comments_steps::{
        analyze::{analyze_movie_step, parse_movie_id},
        utils::init_logging,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let movie_id = match parse_movie_id(env::args()) {
        Ok(v) => v,
        Err(err) => {
            warn!("bad invocation: {}", err);
            println!("{}", AnalysisReport::error(err.to_string()).to_json());
            return ExitCode::FAILURE;
        }
    };

    let config = Config::load();
    let report = analyze_movie_step(&config, movie_id).await;
    println!("{}", report.to_json());

    ExitCode::SUCCESS
}
