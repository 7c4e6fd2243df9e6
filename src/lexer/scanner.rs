use crate::lexer::{Keyword, Position, Token, TokenKind};
use tracing::trace;

/// On-demand scanner over one source buffer.
///
/// The cursor (byte offset, line, column) lives inside the lexer; callers
/// pull one token at a time with [`Lexer::next_token`].
pub struct Lexer {
    input: String,
    current: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.current_position()
    }

    /// Produce the next token.
    ///
    /// Never fails: unrecognised characters come back as `Unknown` tokens and
    /// once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.peek() {
            None => Token::eof(self.current_position()),
            Some(ch) if self.is_alpha(ch) => self.scan_identifier_or_keyword(),
            Some(ch) if self.is_digit(ch) => self.scan_number(),
            Some(ch) if self.is_punct(ch) => self.scan_single(TokenKind::Symbol),
            Some(_) => self.scan_single(TokenKind::Unknown),
        };

        trace!(kind = %token.kind, lexeme = %token.lexeme, pos = %token.pos, "token");
        token
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !self.is_space(ch) {
                break;
            }
            self.advance();
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        let start_idx = self.current;

        while self.peek().is_some_and(|ch| self.is_alphanumeric(ch)) {
            self.advance();
        }

        let text = self.input[start_idx..self.current].to_string();
        let kind = match Keyword::from_str(&text) {
            Some(_) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        };

        Token::new(kind, self.current_position(), text)
    }

    fn scan_number(&mut self) -> Token {
        let start_idx = self.current;

        while self.peek().is_some_and(|ch| self.is_digit(ch)) {
            self.advance();
        }

        let lexeme = self.input[start_idx..self.current].to_string();
        Token::new(TokenKind::Number, self.current_position(), lexeme)
    }

    // Exactly one character, `==` is two Symbol tokens.
    fn scan_single(&mut self, kind: TokenKind) -> Token {
        let start_idx = self.current;
        self.advance();
        let lexeme = self.input[start_idx..self.current].to_string();
        Token::new(kind, self.current_position(), lexeme)
    }

    fn is_space(&self, ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }

    fn is_alpha(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    fn is_digit(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    fn is_alphanumeric(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric()
    }

    fn is_punct(&self, ch: char) -> bool {
        ch.is_ascii_punctuation()
    }
}

/// Yields every token up to, but not including, `Eof`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

// Convenience function for tokenizing input, the trailing Eof token included
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
