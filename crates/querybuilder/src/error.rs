use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryBuilderError {
    /// The base query passed at construction was the empty string.
    #[error("the base query cannot be empty")]
    EmptyBaseQuery,
}
