pub mod client;
pub mod config;
pub mod error;
pub mod pattern;
pub mod q_learning;
pub mod q_table;
pub mod strategy;
pub mod training;
pub mod tree;

pub use error::{Error, Result};
