use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Project not found: {0}")]
    ProjectNotFound(u32),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("{0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, MarketError>;
