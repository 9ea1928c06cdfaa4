use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DieError {
    /// The side count is below 1 or doesn't fit in a `u32`.
    #[error("Invalid configuration: a die needs between 1 and {max} sides, got {0}", max = u32::MAX)]
    InvalidConfiguration(i64),
    /// The notation couldn't be parsed as a single die.
    #[error("Invalid die notation: {0}")]
    InvalidNotation(String),
}
