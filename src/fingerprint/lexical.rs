//! Лексический фингерпринт на основе нормализатора

use crate::common::config::{KeywordCase, NormalizerConfig};
use crate::common::constants::DEFAULT_BUFFER_SIZE;
use crate::common::Result;
use crate::fingerprint::Fingerprint;
use crate::normalizer::normalize_to_string;
use crate::parser::Lexer;

/// Фингерпринт через нормализацию потока токенов.
///
/// Ключевые слова приводятся к нижнему регистру, литералы заменяются на `?`,
/// обратные кавычки снимаются, комментарии и лишние пробелы исчезают.
/// Лексер и его арена переиспользуются между вызовами.
#[derive(Debug)]
pub struct LexicalFingerprinter {
    config: NormalizerConfig,
    lexer: Lexer<'static>,
    buffer_size: usize,
}

impl LexicalFingerprinter {
    pub fn new() -> Self {
        Self {
            config: Self::canonical_config(),
            lexer: Lexer::new(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Создает фингерпринтер с собственным набором правил
    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Начальный размер выходного буфера
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Правила по умолчанию
    pub fn canonical_config() -> NormalizerConfig {
        NormalizerConfig::new()
            .with_keyword_case(KeywordCase::Lower)
            .with_remove_literals(true)
            .with_remove_backtick_on_keywords(true)
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }
}

impl Default for LexicalFingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprint for LexicalFingerprinter {
    fn fingerprint(&mut self, sql: &str) -> Result<String> {
        // Лексер привязывается к источнику с коротким временем жизни
        let mut lexer = std::mem::take(&mut self.lexer).recycle();
        let result = normalize_to_string(&self.config, &mut lexer, sql.as_bytes(), self.buffer_size);
        self.lexer = lexer.recycle();
        result
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}
