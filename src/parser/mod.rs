//! Лексический анализ SQL для sqlnorm

pub mod keywords;
pub mod lexer;
pub mod operators;
pub mod token;

#[cfg(test)]
mod tests;

// Переэкспортируем основные типы
pub use lexer::{Lexer, Tokens};
pub use token::{Position, Token, TokenAttrs, TokenType};
