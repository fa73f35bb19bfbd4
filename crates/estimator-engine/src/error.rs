use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown reference: {0}")]
    UnknownReference(String),
}
