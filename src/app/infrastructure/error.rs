use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of the drag-and-drop ingestion pipeline.
///
/// None of these mutate the document; the presentation layer decides how
/// to surface them.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Please drop a markdown (.md or .markdown) file")]
    NotMarkdown,

    #[error("Could not read \"{file_name}\": {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{file_name}\" is not valid UTF-8 text")]
    Decode { file_name: String },
}

impl IngestError {
    /// True for the validation class (nothing usable was dropped), false
    /// for failures that happened while reading an accepted file.
    pub fn is_validation(&self) -> bool {
        matches!(self, IngestError::NotMarkdown)
    }
}
