//! Фингерпринты SQL запросов
//!
//! Фингерпринт группирует структурно одинаковые запросы независимо от
//! значений литералов. Доступны две стратегии с общим интерфейсом
//! `Fingerprint`: лексическая (через нормализатор) и грамматическая
//! (через полный SQL парсер).

pub mod grammar;
pub mod lexical;

pub use grammar::GrammarFingerprinter;
pub use lexical::LexicalFingerprinter;

use crate::common::Result;

/// Стратегия вычисления фингерпринта
pub trait Fingerprint {
    /// Возвращает каноническую строку для `sql`
    fn fingerprint(&mut self, sql: &str) -> Result<String>;

    /// Название стратегии для логов и CLI
    fn name(&self) -> &'static str;
}
