use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset has no usable entries")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, QuizError>;
