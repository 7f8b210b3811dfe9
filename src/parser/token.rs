//! Токены для SQL лексера sqlnorm
//!
//! Токен не владеет байтами: он хранит только диапазон смещений в исходном
//! буфере, тип и набор атрибутов. Лексема восстанавливается по требованию.

use crate::common::constants::BACKTICK;
use bitflags::bitflags;
use std::fmt;
use std::ops::Range;

/// Полуоткрытый диапазон байт `[start, end)` в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "position start {} > end {}", start, end);
        Self { start, end }
    }

    /// Пустая позиция в точке `at`
    pub fn empty(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Проверяет, что позиция лежит внутри буфера длины `len`
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `*`
    Star,
    /// `-- ...`, `# ...`, `/* ... */`
    Comment,
    /// Ключевое слово или идентификатор, включая `` `quoted` ``
    Keyword,
    /// Строка, число, hex или bit литерал
    Literal,
    Operator,
    /// Конец входных данных
    EndOfInput,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::OpenParen => "OpenParen",
            TokenType::CloseParen => "CloseParen",
            TokenType::Comma => "Comma",
            TokenType::Dot => "Dot",
            TokenType::Star => "Star",
            TokenType::Comment => "Comment",
            TokenType::Keyword => "Keyword",
            TokenType::Literal => "Literal",
            TokenType::Operator => "Operator",
            TokenType::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// Атрибуты токена. Имеют смысл только для `TokenType::Keyword`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenAttrs: u8 {
        /// Зарезервированное слово (SELECT, FROM, ...)
        const BUILTIN_KEYWORD = 1 << 0;
        /// Зарезервированное слово с синтаксисом вызова (ROW_NUMBER, CURRENT_DATE, ...)
        const BUILTIN_FUNCTION = 1 << 1;
    }
}

/// Токен с позицией и атрибутами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub token_type: TokenType,
    pub position: Position,
    pub attrs: TokenAttrs,
}

impl Token {
    pub fn new(token_type: TokenType, position: Position) -> Self {
        Self {
            token_type,
            position,
            attrs: TokenAttrs::empty(),
        }
    }

    pub fn with_attrs(mut self, attrs: TokenAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Токен конца входных данных в точке `at`
    pub fn end_of_input(at: usize) -> Self {
        Self::new(TokenType::EndOfInput, Position::empty(at))
    }

    pub fn is_end_of_input(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }

    pub fn is_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    pub fn is_literal(&self) -> bool {
        self.token_type == TokenType::Literal
    }

    pub fn is_comment(&self) -> bool {
        self.token_type == TokenType::Comment
    }

    pub fn is_builtin_keyword(&self) -> bool {
        self.is_keyword() && self.attrs.contains(TokenAttrs::BUILTIN_KEYWORD)
    }

    pub fn is_builtin_function(&self) -> bool {
        self.is_keyword() && self.attrs.contains(TokenAttrs::BUILTIN_FUNCTION)
    }

    /// Пользовательский идентификатор: ключевое слово вне таблицы зарезервированных
    pub fn is_identifier(&self) -> bool {
        self.is_keyword() && !self.is_builtin_keyword()
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Лексема токена в `source`. Для позиции вне буфера возвращает пустой срез.
    pub fn lexeme<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        if self.position.fits(source.len()) {
            &source[self.position.range()]
        } else {
            &[]
        }
    }

    /// Лексема обрамлена обратными кавычками с обеих сторон
    pub fn is_backtick_quoted(&self, source: &[u8]) -> bool {
        let lexeme = self.lexeme(source);
        lexeme.len() > 1 && lexeme[0] == BACKTICK && lexeme[lexeme.len() - 1] == BACKTICK
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token_type, self.position)?;
        if !self.attrs.is_empty() {
            write!(f, " {:?}", self.attrs)?;
        }
        Ok(())
    }
}
