//! Конфигурация для sqlnorm
//!
//! Набор правил нормализатора и настройки приложения (CLI)

use crate::common::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_LOG_LEVEL};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Регистр, в который приводятся ключевые слова и идентификаторы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// Оставить как в исходном тексте
    #[default]
    Default,
    Lower,
    Upper,
}

impl FromStr for KeywordCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "keep" => Ok(Self::Default),
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            other => Err(Error::configuration(format!(
                "unknown keyword case '{}', expected default|lower|upper",
                other
            ))),
        }
    }
}

/// Набор правил нормализатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Регистр ключевых слов
    pub keyword_case: KeywordCase,
    /// Заменять литералы на `?`
    pub remove_literals: bool,
    /// Оборачивать идентификаторы обратными кавычками
    pub put_backtick_on_keywords: bool,
    /// Снимать обратные кавычки с идентификаторов
    pub remove_backtick_on_keywords: bool,
    /// Ставить пробел перед открывающей скобкой
    pub put_space_before_open_paren: bool,
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    pub fn with_remove_literals(mut self, value: bool) -> Self {
        self.remove_literals = value;
        self
    }

    pub fn with_put_backtick_on_keywords(mut self, value: bool) -> Self {
        self.put_backtick_on_keywords = value;
        self
    }

    pub fn with_remove_backtick_on_keywords(mut self, value: bool) -> Self {
        self.remove_backtick_on_keywords = value;
        self
    }

    pub fn with_put_space_before_open_paren(mut self, value: bool) -> Self {
        self.put_space_before_open_paren = value;
        self
    }

    /// Валидирует набор правил.
    ///
    /// Пробел перед скобкой без обратных кавычек может сломать синтаксис
    /// вызова: `COUNT (*)` невалиден, а `` `COUNT` (*) `` и `COUNT(*)` валидны.
    pub fn validate(&self) -> Result<()> {
        if self.put_backtick_on_keywords && self.remove_backtick_on_keywords {
            return Err(Error::configuration(
                "put_backtick_on_keywords and remove_backtick_on_keywords cannot be both true",
            ));
        }

        if self.put_space_before_open_paren && !self.put_backtick_on_keywords {
            return Err(Error::configuration(
                "put_space_before_open_paren requires put_backtick_on_keywords to be true",
            ));
        }

        Ok(())
    }
}

/// Настройки приложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Уровень логирования
    pub log_level: String,
    /// Начальный размер выходного буфера
    pub initial_buffer_size: usize,
    /// Правила нормализации
    pub normalizer: NormalizerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            initial_buffer_size: DEFAULT_BUFFER_SIZE,
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Накладывает переменные окружения поверх текущих значений
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(level) = std::env::var("SQLNORM_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Ok(size) = std::env::var("SQLNORM_BUFFER_SIZE") {
            self.initial_buffer_size = size.parse().map_err(|_| {
                Error::configuration(format!("SQLNORM_BUFFER_SIZE is not a number: '{}'", size))
            })?;
        }

        if let Ok(case) = std::env::var("SQLNORM_KEYWORD_CASE") {
            self.normalizer.keyword_case = case.parse()?;
        }

        if let Ok(flag) = std::env::var("SQLNORM_REMOVE_LITERALS") {
            self.normalizer.remove_literals = parse_flag("SQLNORM_REMOVE_LITERALS", &flag)?;
        }

        Ok(self)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.initial_buffer_size == 0 {
            return Err(Error::configuration(
                "initial_buffer_size must be greater than 0",
            ));
        }

        self.normalizer.validate()
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{} expects a boolean, got '{}'",
            name, value
        ))),
    }
}
