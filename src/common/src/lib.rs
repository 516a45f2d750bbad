pub mod error;
pub mod model;
pub mod test;

pub use error::{Error, Result};
