// Методы чтения отдельных видов токенов для лексического анализатора
//
// Каждый метод вызывается, когда первый байт токена уже прочитан. Если метод
// возвращает `None`, курсор остается сразу за первым байтом (кроме операторов,
// см. `read_operator`).

impl<'src> Lexer<'src> {
    /// Читает комментарий: `-- ...`, `# ...` или `/* ... */`
    pub(crate) fn read_comment(&mut self, c: u8) -> Option<Token> {
        match c {
            b'#' => {
                self.skip_while(|c| c != b'\n');
                Some(self.make_token(TokenType::Comment))
            }
            // MySQL требует пробельный символ после `--`
            b'-' if self.peek() == Some(b'-')
                && self.peek_ahead().map_or(true, is_whitespace) =>
            {
                self.skip_while(|c| c != b'\n');
                Some(self.make_token(TokenType::Comment))
            }
            b'/' if self.peek() == Some(b'*') => {
                self.cursor += 1;
                loop {
                    match self.advance() {
                        None => break,
                        Some(b'*') if self.peek() == Some(b'/') => {
                            self.cursor += 1;
                            break;
                        }
                        Some(_) => {}
                    }
                }
                Some(self.make_token(TokenType::Comment))
            }
            _ => None,
        }
    }

    /// Пытается прочитать литерал: строку, hex, bit-value или число
    pub(crate) fn read_literal(&mut self, c: u8) -> Option<Token> {
        let next = self.peek();

        match (c, next) {
            (b'\'' | b'"', _) => Some(self.read_string_literal(c)),
            (b'b' | b'B', Some(b'\'')) | (b'x' | b'X', Some(b'\'')) => {
                self.cursor += 1;
                Some(self.read_quoted_blob())
            }
            (b'0', Some(b'b' | b'B' | b'x' | b'X')) => {
                self.cursor += 1;
                Some(self.read_prefixed_blob())
            }
            (b'-' | b'+' | b'.', Some(n)) if is_digit(n) => Some(self.read_number(c)),
            (c, _) if is_digit(c) => Some(self.read_number(c)),
            _ => None,
        }
    }

    /// Читает строковый литерал в `'` или `"`.
    ///
    /// Обратный слеш экранирует следующий символ, удвоенная кавычка означает
    /// саму кавычку. Незакрытая строка продолжается до конца входа.
    pub(crate) fn read_string_literal(&mut self, quote: u8) -> Token {
        let mut escaped = false;

        while let Some(c) = self.advance() {
            if c == b'\\' {
                escaped = !escaped;
                continue;
            }

            if c == quote && !escaped {
                if self.peek() == Some(quote) {
                    self.cursor += 1;
                    continue;
                }
                break;
            }

            escaped = false;
        }

        self.make_token(TokenType::Literal)
    }

    /// Читает `x'...'` или `b'...'` до закрывающей кавычки
    pub(crate) fn read_quoted_blob(&mut self) -> Token {
        while let Some(c) = self.advance() {
            if c == b'\'' {
                break;
            }
        }
        self.make_token(TokenType::Literal)
    }

    /// Читает `0x...` или `0b...` до пробела, скобки или запятой
    pub(crate) fn read_prefixed_blob(&mut self) -> Token {
        self.skip_while(|c| !is_whitespace(c) && !matches!(c, b'(' | b')' | b','));
        self.make_token(TokenType::Literal)
    }

    /// Читает число: цифры, одна десятичная точка, экспонента и встроенные
    /// минусы перед цифрой (`12e-4`, `+12-31233`).
    pub(crate) fn read_number(&mut self, first: u8) -> Token {
        let mut seen_dot = first == b'.';
        let mut prev = first;

        while let Some(c) = self.peek() {
            let next = self.peek_ahead();
            let next_is_digit = next.map_or(false, is_digit);

            let accept = if is_digit(c) {
                true
            } else if c == b'.' && !seen_dot && next_is_digit {
                seen_dot = true;
                true
            } else if c == b'-' && next_is_digit {
                true
            } else if c == b'+' && matches!(prev, b'e' | b'E') && next_is_digit {
                true
            } else {
                matches!(c, b'e' | b'E') && (next_is_digit || matches!(next, Some(b'-' | b'+')))
            };

            if !accept {
                break;
            }
            self.cursor += 1;
            prev = c;
        }

        self.make_token(TokenType::Literal)
    }

    /// Читает ключевое слово, идентификатор или `` `quoted` `` идентификатор
    pub(crate) fn read_keyword(&mut self, c: u8) -> Option<Token> {
        if c == b'`' {
            return Some(self.read_quoted_identifier());
        }

        if !is_identifier_start(c) {
            return None;
        }

        self.skip_while(is_identifier_part);
        let attrs = self.keyword_attrs();
        Some(self.make_token(TokenType::Keyword).with_attrs(attrs))
    }

    /// Читает идентификатор в обратных кавычках.
    ///
    /// Удвоенная кавычка внутри не закрывает идентификатор. Незакрытый
    /// идентификатор продолжается до конца входа.
    pub(crate) fn read_quoted_identifier(&mut self) -> Token {
        while let Some(c) = self.advance() {
            if c == b'`' {
                if self.peek() == Some(b'`') {
                    self.cursor += 1;
                    continue;
                }
                break;
            }
        }
        self.make_token(TokenType::Keyword)
    }

    /// Определяет атрибуты ключевого слова от `token_start` до курсора.
    ///
    /// Лексема копируется в арену и приводится к верхнему регистру на месте,
    /// поэтому поиск по таблице не выделяет память.
    pub(crate) fn keyword_attrs(&mut self) -> TokenAttrs {
        let word = &self.source[self.token_start..self.cursor];
        self.arena.clear();
        self.arena.extend_from_slice(word);
        to_upper_in_place(&mut self.arena);
        lookup_builtin(&self.arena).unwrap_or_default()
    }

    /// Читает самый длинный оператор, начинающийся с `token_start`.
    ///
    /// Курсор продвигается, пока накопленная последовательность остается
    /// префиксом какого-либо оператора, затем откатывается к последней точке,
    /// где последовательность сама является оператором. Если такой точки нет,
    /// токен не создается и первый байт пропускается.
    pub(crate) fn read_operator(&mut self) -> Option<Token> {
        let start = self.token_start;
        if !is_operator_prefix(&self.source[start..self.cursor]) {
            return None;
        }

        let mut last_match = is_operator(&self.source[start..self.cursor]).then_some(self.cursor);

        while self.cursor < self.source.len()
            && is_operator_prefix(&self.source[start..self.cursor + 1])
        {
            self.cursor += 1;
            if is_operator(&self.source[start..self.cursor]) {
                last_match = Some(self.cursor);
            }
        }

        match last_match {
            Some(end) => {
                self.cursor = end;
                Some(self.make_token(TokenType::Operator))
            }
            None => {
                self.cursor = start + 1;
                None
            }
        }
    }
}
