use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("Could not parse reference: {0}")]
    Parse(String),

    #[error("Unknown book: {0}")]
    UnknownBook(String),

    #[error("Reference '{0}' needs both a chapter and a verse")]
    ReferenceIncomplete(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Move out of range: the list has {len} verses")]
    InvalidMove { from: usize, to: usize, len: usize },

    /// A search the session reported as failed, surfaced by one-shot callers.
    #[error("{0}")]
    Search(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VerseError>;
