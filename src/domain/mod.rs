pub mod error;
pub mod proposition;

pub use error::{AppError, Result};
pub use proposition::Proposition;
