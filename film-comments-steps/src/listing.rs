use {
    std::collections::HashMap,
    anyhow::Result,
    tracing::info,
    film_comments_core::{
        config::Config,
        database::Database,
        entity::{CommentEntity, MovieMetadata},
        tmdb::Tmdb,
    },
    crate::progress::Progress,
};

/// Prints every stored comment next to its movie's TMDB title and page.
/// Comments whose movie metadata is unavailable are left out.
pub async fn list_comments_step(config: &Config) -> Result<()> {
    let database = Database::new(config.infra().database()).await?;
    let tmdb = Tmdb::new(&config.infra().tmdb());

    let comments = database.all_comments().await?;
    info!("listing {} comments", comments.len());

    let mut movies: HashMap<i64, Option<MovieMetadata>> = HashMap::new();
    let mut progress = Progress::new("listing comments".to_owned());

    for comment in comments {
        let movie_id = comment.movie_id();
        if !movies.contains_key(&movie_id) {
            let movie = tmdb.movie_or_unavailable(movie_id).await;
            movies.insert(movie_id, movie);
        }

        if let Some(Some(movie)) = movies.get(&movie_id) {
            println!("{}", format_listing_entry(movie, &comment));
        }

        progress.update();
    }

    progress.finish();
    info!("looked up metadata for {} movies", movies.len());

    Ok(())
}

fn format_listing_entry(movie: &MovieMetadata, comment: &CommentEntity) -> String {
    format!(
        "film: {}\ncomment: {}\ntmdb url: {}\n{}",
        movie.title(),
        comment.comment(),
        movie.url(),
        "-".repeat(60),
    )
}
