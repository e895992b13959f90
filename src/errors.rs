use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LifestyleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
