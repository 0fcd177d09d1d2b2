// Shared kernel used by every module

pub mod config;
pub mod errors;
pub mod utils;

pub use config::{AppConfig, TmdbConfig};
pub use errors::{AppError, AppResult};
