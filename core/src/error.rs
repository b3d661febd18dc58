#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("sample timestamp {timestamp} precedes previous timestamp {last}")]
    OutOfOrder { timestamp: f32, last: f32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
