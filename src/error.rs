use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieManiaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("OMDb API key is not set. Set OMDB_API_KEY or apiKey in ~/.config/movie-mania/config.json")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] movie_mania_common::Error),
}

pub type Result<T> = std::result::Result<T, MovieManiaError>;
