use {
    typed_builder::TypedBuilder,
    serde::Serialize,
};

#[derive(TypedBuilder, Serialize, Debug, Clone, PartialEq)]
pub struct CommentEntity {
    #[builder(setter(into))]
    comment: String,
    movie_id: i64,
}

#[derive(TypedBuilder, Serialize, Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    #[builder(setter(into))]
    title: String,
    #[builder(setter(into))]
    url: String,
}

impl CommentEntity {
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }
}

impl MovieMetadata {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
