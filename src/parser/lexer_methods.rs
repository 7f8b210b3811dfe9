// Методы лексического анализатора

impl<'src> Lexer<'src> {
    /// Привязывает новый источник и перематывает курсор в начало.
    ///
    /// Арена растет до `max(len, MIN_ARENA_CAPACITY)`, если текущей емкости не
    /// хватает, и никогда не уменьшается.
    pub fn parse(&mut self, source: &'src [u8]) {
        self.source = source;
        self.cursor = 0;
        self.token_start = 0;

        if self.arena.capacity() < source.len() || self.arena.capacity() == 0 {
            let capacity = source.len().max(MIN_ARENA_CAPACITY);
            log::trace!(
                "growing lexer arena from {} to {} bytes",
                self.arena.capacity(),
                capacity
            );
            self.arena = Vec::with_capacity(capacity);
        }
    }

    /// Перематывает курсор на начало текущего источника
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.token_start = 0;
    }

    /// Возвращает следующий значимый токен.
    ///
    /// После конца входных данных всегда возвращает `TokenType::EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        while !self.is_at_end() {
            self.token_start = self.cursor;
            if let Some(token) = self.scan_token() {
                return token;
            }
        }
        Token::end_of_input(self.source.len())
    }

    /// Итератор по оставшимся токенам текущего источника
    pub fn tokens(&mut self) -> Tokens<'_, 'src> {
        Tokens { lexer: self }
    }

    /// Возвращает все токены источника с начала, включая завершающий `EndOfInput`
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.reset();
        let mut tokens: Vec<Token> = self.tokens().collect();
        tokens.push(Token::end_of_input(self.source.len()));
        tokens
    }

    /// Лексема токена без копирования
    pub fn lexeme_ref(&self, token: &Token) -> &'src [u8] {
        token.lexeme(self.source)
    }

    /// Копия лексемы токена
    pub fn lexeme_copy(&self, token: &Token) -> Vec<u8> {
        self.lexeme_ref(token).to_vec()
    }

    /// Копирует лексему в `dst`, сколько поместится.
    ///
    /// Возвращает количество записанных байт и записанный префикс `dst`.
    pub fn lexeme_into<'d>(&self, token: &Token, dst: &'d mut [u8]) -> (usize, &'d [u8]) {
        let lexeme = self.lexeme_ref(token);
        let n = lexeme.len().min(dst.len());
        dst[..n].copy_from_slice(&lexeme[..n]);
        (n, &dst[..n])
    }

    /// Текущий источник
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Текущая позиция курсора
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Емкость рабочей арены
    pub fn arena_capacity(&self) -> usize {
        self.arena.capacity()
    }

    // === Вспомогательные методы ===

    /// Разбирает один токен, начиная с `token_start`.
    ///
    /// Всегда сдвигает курсор минимум на один байт. `None` означает, что байт
    /// не дал токена (пробел или нераспознанный символ).
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.advance()?;

        match c {
            b'*' => Some(self.make_token(TokenType::Star)),
            b',' => Some(self.make_token(TokenType::Comma)),
            b'(' => Some(self.make_token(TokenType::OpenParen)),
            b')' => Some(self.make_token(TokenType::CloseParen)),
            c if is_whitespace(c) => None,
            _ => {
                if let Some(token) = self.read_comment(c) {
                    return Some(token);
                }

                if let Some(token) = self.read_literal(c) {
                    return Some(token);
                }

                // Точка, не ставшая частью числа
                if c == b'.' {
                    return Some(self.make_token(TokenType::Dot));
                }

                if let Some(token) = self.read_keyword(c) {
                    return Some(token);
                }

                self.read_operator()
            }
        }
    }

    /// Токен от `token_start` до курсора
    pub(crate) fn make_token(&self, token_type: TokenType) -> Token {
        Token::new(token_type, Position::new(self.token_start, self.cursor))
    }

    /// Возвращает текущий байт и продвигает позицию
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.cursor += 1;
        Some(c)
    }

    /// Возвращает текущий байт без продвижения позиции
    pub(crate) fn peek(&self) -> Option<u8> {
        self.source.get(self.cursor).copied()
    }

    /// Возвращает байт, следующий за текущим
    pub(crate) fn peek_ahead(&self) -> Option<u8> {
        self.source.get(self.cursor + 1).copied()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Продвигает курсор, пока `predicate` истинен для текущего байта
    pub(crate) fn skip_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.cursor += 1;
        }
    }
}

pub(crate) fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

pub(crate) fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Первый байт идентификатора. Байты вне ASCII считаются частью имени.
pub(crate) fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c >= 0x80
}

pub(crate) fn is_identifier_part(c: u8) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || c == b'$'
}
