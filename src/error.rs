use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeFormError {
    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    /// Non-2xx answer from the prediction service. The message is either the
    /// service's own `error` text or `HTTP <status>: <reason>`.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response did not contain a prediction")]
    MissingPrediction,
}

pub type GfResult<T> = Result<T, GradeFormError>;
