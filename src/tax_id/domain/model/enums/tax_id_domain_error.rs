use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxIdDomainError {
    #[error("tax id input exceeds {max} characters")]
    InputTooLong { max: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
