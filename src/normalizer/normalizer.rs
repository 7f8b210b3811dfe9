//! Нормализатор SQL
//!
//! Восстанавливает текст запроса из потока токенов по набору правил
//! `NormalizerConfig` и пишет результат в буфер фиксированной емкости.
//!
//! Главный инвариант: при любой емкости `C` записанные байты совпадают с
//! первыми `C` байтами результата, полученного с неограниченным буфером.
//! Если место закончилось, возвращается корректный префикс и ошибка
//! `Error::BufferTooSmall`.

use crate::common::config::{KeywordCase, NormalizerConfig};
use crate::common::constants::{BACKTICK, LITERAL_PLACEHOLDER, MAX_BUFFER_SIZE};
use crate::common::error::{Error, Result};
use crate::common::utils::{put_bytes, to_lower_in_place, to_upper_in_place, total_len};
use crate::parser::{Lexer, Token, TokenType};

const SPACE: &[u8] = b" ";
const BACKTICK_BYTES: &[u8] = &[BACKTICK];
const EMPTY: &[u8] = &[];

/// Результат нормализации: число записанных байт, записанный префикс
/// выходного буфера и итог операции
#[derive(Debug)]
pub struct NormalizeOutput<'a> {
    pub written: usize,
    pub output: &'a [u8],
    pub result: Result<()>,
}

impl<'a> NormalizeOutput<'a> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Выход обрезан из-за нехватки места
    pub fn is_truncated(&self) -> bool {
        matches!(&self.result, Err(e) if e.is_buffer_too_small())
    }

    /// Записанный префикс либо ошибка
    pub fn into_result(self) -> Result<&'a [u8]> {
        self.result.map(|()| self.output)
    }
}

/// Нормализует `source` в `output` по правилам `config`.
///
/// Лексер привязывается к `source` и перематывается в начало. Нарушение
/// инвариантов конфигурации проверяется до чтения первого токена: в этом
/// случае ничего не записывается.
pub fn normalize<'s, 'o>(
    config: &NormalizerConfig,
    lexer: &mut Lexer<'s>,
    source: &'s [u8],
    output: &'o mut [u8],
) -> NormalizeOutput<'o> {
    if let Err(e) = config.validate() {
        log::debug!("normalizer config rejected: {}", e);
        return NormalizeOutput {
            written: 0,
            output: &[],
            result: Err(e),
        };
    }

    lexer.parse(source);
    lexer.reset();

    let mut sink = Sink::new(output);
    let mut prev: Option<Token> = None;
    let mut complete = true;

    loop {
        let token = lexer.next_token();
        if token.is_end_of_input() {
            break;
        }

        // Комментарии не попадают в вывод, разделитель перед ними тоже
        if token.is_comment() {
            continue;
        }

        if is_space_able(config, prev.as_ref(), &token) && !sink.put(&[SPACE]) {
            complete = false;
            break;
        }

        let start = sink.written();
        let parts = token_parts(config, prev.as_ref(), &token, source);
        let fits = sink.put(&parts);

        if token.is_keyword() {
            sink.fold_case(start, config.keyword_case);
        }

        if !fits {
            complete = false;
            break;
        }

        prev = Some(token);
    }

    let capacity = sink.capacity();
    let output = sink.into_written();
    let written = output.len();

    let result = if complete {
        Ok(())
    } else {
        log::debug!(
            "normalized output truncated: {} of {} bytes written",
            written,
            capacity
        );
        Err(Error::buffer_too_small(written, capacity))
    };

    NormalizeOutput {
        written,
        output,
        result,
    }
}

/// Нормализует `source` в строку, удваивая буфер при нехватке места.
///
/// Ошибка конфигурации возвращается сразу. Байты вне UTF-8 заменяются
/// символом замены.
pub fn normalize_to_string<'s>(
    config: &NormalizerConfig,
    lexer: &mut Lexer<'s>,
    source: &'s [u8],
    initial_capacity: usize,
) -> Result<String> {
    let mut capacity = initial_capacity.max(source.len()).max(1);

    loop {
        let mut buffer = vec![0u8; capacity];
        let out = normalize(config, lexer, source, &mut buffer);

        match out.result {
            Ok(()) => return Ok(String::from_utf8_lossy(out.output).into_owned()),
            Err(e) if e.is_buffer_too_small() && capacity < MAX_BUFFER_SIZE => {
                log::debug!("retrying normalization with {} byte buffer", capacity * 2);
                capacity = (capacity * 2).min(MAX_BUFFER_SIZE);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Нужен ли пробел между `prev` и `token`
pub fn is_space_able(config: &NormalizerConfig, prev: Option<&Token>, token: &Token) -> bool {
    let Some(prev) = prev else {
        return false;
    };

    if config.put_space_before_open_paren && token.token_type == TokenType::OpenParen {
        return true;
    }

    if prev.token_type == TokenType::Dot || token.token_type == TokenType::Dot {
        return false;
    }

    // Вызов функции: COUNT(
    if prev.is_keyword() && token.token_type == TokenType::OpenParen {
        return false;
    }

    if matches!(token.token_type, TokenType::Comma | TokenType::CloseParen) {
        return false;
    }

    prev.token_type != TokenType::OpenParen
}

/// Токен может быть обрамлен обратными кавычками или освобожден от них
pub fn is_backtick_eligible(prev: Option<&Token>, token: &Token) -> bool {
    token.is_identifier()
        || token.token_type == TokenType::Star
        || (token.is_keyword() && prev.is_some_and(|p| p.token_type == TokenType::Dot))
}

/// Части вывода для одного токена: префикс, тело и суффикс
fn token_parts<'s>(
    config: &NormalizerConfig,
    prev: Option<&Token>,
    token: &Token,
    source: &'s [u8],
) -> [&'s [u8]; 3] {
    if token.is_literal() && config.remove_literals {
        return [LITERAL_PLACEHOLDER, EMPTY, EMPTY];
    }

    let lexeme = token.lexeme(source);
    if !is_backtick_eligible(prev, token) {
        return [lexeme, EMPTY, EMPTY];
    }

    let quoted = token.is_backtick_quoted(source);
    if config.put_backtick_on_keywords && !quoted {
        [BACKTICK_BYTES, lexeme, BACKTICK_BYTES]
    } else if config.remove_backtick_on_keywords && quoted {
        [&lexeme[1..lexeme.len() - 1], EMPTY, EMPTY]
    } else {
        [lexeme, EMPTY, EMPTY]
    }
}

/// Выходной буфер с текущим смещением
struct Sink<'o> {
    buf: &'o mut [u8],
    off: usize,
}

impl<'o> Sink<'o> {
    fn new(buf: &'o mut [u8]) -> Self {
        Self { buf, off: 0 }
    }

    /// Пишет части целиком или максимальный префикс.
    /// Возвращает `false`, если записано меньше, чем требовалось.
    fn put(&mut self, parts: &[&[u8]]) -> bool {
        let n = put_bytes(&mut self.buf[self.off..], parts);
        self.off += n;
        n == total_len(parts)
    }

    /// Меняет регистр байт, записанных начиная с `start`
    fn fold_case(&mut self, start: usize, case: KeywordCase) {
        let written = &mut self.buf[start..self.off];
        match case {
            KeywordCase::Lower => to_lower_in_place(written),
            KeywordCase::Upper => to_upper_in_place(written),
            KeywordCase::Default => {}
        }
    }

    fn written(&self) -> usize {
        self.off
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn into_written(self) -> &'o [u8] {
        let Sink { buf, off } = self;
        &buf[..off]
    }
}
