use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown contraceptive method: {0}")]
    UnknownMethod(String),
}
