use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cart encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
