use thiserror::Error;

/// Errors surfaced by dictionary construction and loading.
///
/// The conversion state machine itself never returns a `Result` — per the
/// engine's error model, a lookup miss or an unhandled key is a state
/// transition, not a failure. `SkkError` only covers the boundary where we
/// touch the filesystem or parse a static dictionary.
#[derive(Debug, Error)]
pub enum SkkError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary entry at line {line}")]
    MalformedDictionaryLine { line: usize },
}

pub type Result<T> = std::result::Result<T, SkkError>;
