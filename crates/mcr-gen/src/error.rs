use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API error: {0}")]
    Api(String),

    #[error("deserialize error in {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("generation returned no completion text")]
    EmptyCompletion,
}
