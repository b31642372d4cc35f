use thiserror::Error;

pub type TrendlineResult<T> = Result<T, TrendlineError>;

#[derive(Debug, Error)]
pub enum TrendlineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("drawing backend error: {0}")]
    Backend(String),
}
