//! Обработка ошибок для sqlnorm

use thiserror::Error;

/// Основной тип ошибки для sqlnorm
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка разбора TOML конфигурации
    #[error("Config decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// Ошибка записи TOML конфигурации
    #[error("Config encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// Ошибка конфигурации (нарушены инварианты набора правил)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Выходной буфер закончился посреди потока токенов
    #[error("buffer too small: wrote {written} of {capacity} bytes before running out of space")]
    BufferTooSmall { written: usize, capacity: usize },

    /// Ошибка парсинга SQL (только грамматический фингерпринт)
    #[error("SQL parsing error: {message}")]
    SqlParsing { message: String },
}

/// Тип результата для sqlnorm
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку переполнения выходного буфера
    pub fn buffer_too_small(written: usize, capacity: usize) -> Self {
        Self::BufferTooSmall { written, capacity }
    }

    /// Создает ошибку SQL парсинга
    pub fn sql_parsing(message: impl Into<String>) -> Self {
        Self::SqlParsing {
            message: message.into(),
        }
    }

    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
