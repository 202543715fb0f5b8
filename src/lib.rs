pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
