use thiserror::Error;

/// Errors raised at the season loading boundary.
///
/// The standings calculators themselves never fail; everything here is a
/// data-quality problem caught before a season reaches them.
#[derive(Debug, Error)]
pub enum SeasonError {
    #[error("Failed to parse season data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid position {position} for {driver} at {circuit}")]
    InvalidPosition {
        circuit: String,
        driver: String,
        position: u32,
    },

    #[error("Position {position} assigned more than once at {circuit}")]
    DuplicatePosition { circuit: String, position: u32 },

    #[error("Invalid season year: {0}")]
    InvalidYear(String),

    #[error("Season not found: {0}")]
    SeasonNotFound(u16),
}

/// Result type for season loading operations.
pub type Result<T> = std::result::Result<T, SeasonError>;
