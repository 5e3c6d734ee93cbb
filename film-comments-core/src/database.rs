use {
    anyhow::{anyhow, Result},
    sqlx::{postgres::PgPoolOptions, Row},
    tracing::info,
    crate::{
        config::DatabaseConfig,
        entity::CommentEntity,
    },
};

pub struct Database {
    pool: sqlx::postgres::PgPool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let connection_string = config.connection_string()
            .ok_or_else(|| anyhow!("database connection string is not configured"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .connect(connection_string)
            .await?;

        info!("connected to comments database");

        Ok(Self {
            pool,
        })
    }

    /// Connections are opened on first query, for long-running processes.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let connection_string = config.connection_string()
            .ok_or_else(|| anyhow!("database connection string is not configured"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .connect_lazy(connection_string)?;

        Ok(Self {
            pool,
        })
    }

    pub async fn comments_for_movie(&self, movie_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query("select comment from comments where movie_id = $1")
            .bind(movie_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<String> { Ok(row.try_get("comment")?) })
            .collect()
    }

    pub async fn all_comments(&self) -> Result<Vec<CommentEntity>> {
        let rows = sqlx::query("select comment, movie_id::bigint as movie_id from comments")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<CommentEntity> {
                Ok(CommentEntity::builder()
                    .comment(row.try_get::<String, _>("comment")?)
                    .movie_id(row.try_get::<i64, _>("movie_id")?)
                    .build())
            })
            .collect()
    }
}
