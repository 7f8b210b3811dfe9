//! Общие типы и утилиты для sqlnorm

pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
