use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("unknown strategy '{0}' (expected random, classifier or q-learning)")]
    UnknownStrategy(String),

    #[error("pre-training is only available to the q-learning strategy")]
    PretrainUnsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
