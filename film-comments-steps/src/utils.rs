use {
    std::env,
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
    },
};

/// Logs go to stderr: stdout carries the report. `LOG_FORMAT=json` switches
/// to json lines.
pub fn init_logging() {
    let json = env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr);

    let quiet_sqlx = filter_fn(|metadata| {
        if metadata.target().starts_with("sqlx::query") {
            metadata.level() > &Level::INFO
        } else {
            true
        }
    });

    if json {
        builder.json().finish().with(quiet_sqlx).init();
    } else {
        builder.finish().with(quiet_sqlx).init();
    }
}
