use {
    anyhow::{anyhow, Result},
    reqwest::StatusCode,
    serde::Deserialize,
    tracing::warn,
    crate::{
        config::TmdbConfig,
        entity::MovieMetadata,
    },
};

pub struct Tmdb {
    api_key: Option<String>,
    endpoint: String,
    language: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct MovieResponse {
    title: Option<String>,
}

impl Tmdb {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            api_key: config.api_key().cloned(),
            endpoint: config.endpoint(),
            language: config.language(),
            client: reqwest::Client::new(),
        }
    }

    /// Metadata lookup that never fails the caller: errors are logged and
    /// reported as "unavailable".
    pub async fn movie_or_unavailable(&self, movie_id: i64) -> Option<MovieMetadata> {
        if self.api_key.is_none() {
            warn!("tmdb api key is not configured, skipping metadata for movie {}", movie_id);
            return None;
        }

        match self.movie(movie_id).await {
            Ok(v) => Some(v),
            Err(err) => {
                warn!("failed to fetch tmdb metadata for movie {}: {}", movie_id, err);
                None
            }
        }
    }

    pub async fn movie(&self, movie_id: i64) -> Result<MovieMetadata> {
        let api_key = self.api_key.as_ref().ok_or_else(|| anyhow!("tmdb api key is not configured"))?;

        let res = self.client.get(self.movie_request_url(movie_id))
            .query(&[("api_key", api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(anyhow!("tmdb api returned status: {}", res.status().as_u16()));
        }

        let body: MovieResponse = res.json().await?;
        Ok(movie_metadata(movie_id, body))
    }

    fn movie_request_url(&self, movie_id: i64) -> String {
        format!("{}/movie/{}", self.endpoint.trim_end_matches('/'), movie_id)
    }
}

pub fn movie_page_url(movie_id: i64) -> String {
    format!("https://www.themoviedb.org/movie/{}", movie_id)
}

fn movie_metadata(movie_id: i64, body: MovieResponse) -> MovieMetadata {
    MovieMetadata::builder()
        .title(body.title.unwrap_or_default())
        .url(movie_page_url(movie_id))
        .build()
}
