pub mod api;
pub mod assets;
pub mod error;
pub mod health;
pub mod pages;

pub use error::{ApiError, AppError};
