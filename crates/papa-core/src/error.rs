use thiserror::Error;

#[derive(Debug, Error)]
pub enum PapaError {
    #[error("not set up yet: run 'papa setup'")]
    NotOnboarded,

    #[error("invalid due date '{0}': expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("answer required for question '{0}'")]
    AnswerRequired(String),

    #[error("invalid answer '{answer}' for question '{question}'")]
    InvalidAnswer { question: String, answer: String },

    #[error("unknown settings field: {0}")]
    UnknownField(String),

    #[error("media lookup failed: {0}")]
    Media(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PapaError>;
