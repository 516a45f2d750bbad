use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid move '{0}' (expected rock, paper or scissors)")]
    InvalidMove(String),
}

pub type Result<T> = std::result::Result<T, Error>;
