//! Лексический анализатор SQL для sqlnorm
//!
//! Однопроходный побайтовый сканер. Токены не копируют байты исходного текста,
//! а хранят только позиции. Лексер никогда не возвращает ошибку: на битом или
//! обрезанном входе он выдает токены с наилучшими возможными границами.
//!
//! Лексер создается один раз и переиспользуется: `parse` привязывает новый
//! источник, `reset` перематывает курсор, рабочая арена никогда не сжимается.

use crate::common::constants::MIN_ARENA_CAPACITY;
use crate::common::utils::to_upper_in_place;
use crate::parser::keywords::lookup_builtin;
use crate::parser::operators::{is_operator, is_operator_prefix};
use crate::parser::token::{Position, Token, TokenAttrs, TokenType};

/// Лексический анализатор SQL
#[derive(Debug, Clone, Default)]
pub struct Lexer<'src> {
    /// Исходный текст
    source: &'src [u8],
    /// Текущая позиция в тексте
    cursor: usize,
    /// Начало текущего токена
    token_start: usize,
    /// Рабочий буфер для приведения ключевых слов к верхнему регистру
    arena: Vec<u8>,
}

impl Lexer<'static> {
    /// Создает лексер без источника
    pub fn new() -> Self {
        Self::default()
    }

    /// Создает лексер с заранее выделенной ареной
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }
}

impl<'src> Lexer<'src> {
    /// Создает лексер, сразу привязанный к `source`
    pub fn for_source(source: &'src [u8]) -> Self {
        let mut lexer = Self {
            source: &[],
            cursor: 0,
            token_start: 0,
            arena: Vec::new(),
        };
        lexer.parse(source);
        lexer
    }

    /// Отвязывает источник, сохраняя арену.
    ///
    /// Позволяет переиспользовать один лексер для источников с разным временем
    /// жизни без повторного выделения арены.
    pub fn recycle<'other>(self) -> Lexer<'other> {
        Lexer {
            source: &[],
            cursor: 0,
            token_start: 0,
            arena: self.arena,
        }
    }
}

/// Итератор по токенам до конца входных данных (конец не включается)
pub struct Tokens<'l, 'src> {
    lexer: &'l mut Lexer<'src>,
}

impl<'l, 'src> Iterator for Tokens<'l, 'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.lexer.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
