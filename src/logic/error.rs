use sqlparser::parser::ParserError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid query: {0}")]
    InvalidQuery(ParserError),

    #[error("Invalid query model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed metadata row: {0}")]
    MalformedRow(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<ParserError> for Error {
    fn from(value: ParserError) -> Self {
        Error::InvalidQuery(value)
    }
}
