//! sqlnorm - лексер и нормализатор SQL запросов в диалекте MySQL
//!
//! Лексер разбирает байты запроса в поток токенов без копирования, нормализатор
//! восстанавливает из них канонический текст в буфер фиксированного размера.
//! Поверх нормализатора построены фингерпринты запросов.

pub mod cli;
pub mod common;
pub mod fingerprint;
pub mod normalizer;
pub mod parser;

pub use common::config::{AppConfig, KeywordCase, NormalizerConfig};
pub use common::error::{Error, Result};
pub use fingerprint::{Fingerprint, GrammarFingerprinter, LexicalFingerprinter};
pub use normalizer::{normalize, normalize_to_string, NormalizeOutput};
pub use parser::{Lexer, Position, Token, TokenAttrs, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
