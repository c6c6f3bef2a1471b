use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Stream error: {0}")]
    Stream(String),
}
