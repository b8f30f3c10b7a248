use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Logger initialization failed: {message}")]
    LoggerInit { message: String },
}

pub type Result<T> = std::result::Result<T, DataError>;
