use super::cursor::Cursor;
use super::token::{Span, Token, TokenKind};
use crate::error::SyntaxError;

/// Scans a command script into a sequence of tokens.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    pub fn scan_tokens(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_blanks_and_comments();
            if self.cursor.is_at_end() {
                break;
            }
            tokens.push(self.scan_token()?);
        }

        let eof_pos = self.cursor.pos();
        tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(eof_pos, eof_pos),
        });
        Ok(tokens)
    }

    fn skip_blanks_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(b' ' | b'\t' | b'\r') => {
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek_next() == Some(b'/') => {
                    // Stop at the newline so it still separates commands.
                    self.cursor.advance_while(|c| c != b'\n');
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, SyntaxError> {
        let start = self.cursor.pos();
        let Some(ch) = self.cursor.advance() else {
            return Err(SyntaxError::new("unexpected end of input", start, 0));
        };

        let kind = match ch {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b',' => TokenKind::Comma,
            b'.' if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number(start)?
            }
            b'.' => TokenKind::Dot,
            b'-' => TokenKind::Minus,
            b'=' => TokenKind::Assign,
            b'\n' | b';' => TokenKind::Separator,
            b'"' | b'\'' => self.scan_string(ch, start)?,
            c if c.is_ascii_digit() => self.scan_number(start)?,
            c if is_ident_start(c) => self.scan_identifier(start),
            _ => {
                let shown = self.cursor.slice_from(start);
                let shown = if shown.is_empty() { "non-ASCII input" } else { shown };
                return Err(SyntaxError::new(
                    format!("unexpected character '{shown}'"),
                    start,
                    1,
                ));
            }
        };

        Ok(Token {
            kind,
            span: Span::new(start, self.cursor.pos()),
        })
    }

    fn scan_string(&mut self, quote: u8, start: usize) -> Result<TokenKind, SyntaxError> {
        let mut bytes = Vec::new();
        loop {
            match self.cursor.advance() {
                Some(c) if c == quote => break,
                Some(b'\\') => match self.cursor.advance() {
                    Some(b'n') => bytes.push(b'\n'),
                    Some(b't') => bytes.push(b'\t'),
                    Some(b'\\') => bytes.push(b'\\'),
                    Some(c) if c == quote => bytes.push(c),
                    Some(c) => bytes.extend([b'\\', c]),
                    None => return Err(self.unterminated(start)),
                },
                Some(b'\n') | None => return Err(self.unterminated(start)),
                Some(c) => bytes.push(c),
            }
        }
        Ok(TokenKind::String(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn unterminated(&self, start: usize) -> SyntaxError {
        SyntaxError::new(
            "unterminated string literal",
            start,
            self.cursor.pos() - start,
        )
    }

    fn scan_number(&mut self, start: usize) -> Result<TokenKind, SyntaxError> {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == Some(b'.') {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }
        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(start);
        text.parse::<f64>().map(TokenKind::Number).map_err(|_| {
            SyntaxError::new(
                format!("invalid number literal '{text}'"),
                start,
                self.cursor.pos() - start,
            )
        })
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.advance_while(is_ident_continue);
        keyword_or_ident(self.cursor.slice_from(start))
    }
}

fn keyword_or_ident(text: &str) -> TokenKind {
    match text {
        "let" => TokenKind::Let,
        "delete" => TokenKind::Delete,
        "in" => TokenKind::In,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "undefined" => TokenKind::Undefined,
        _ => TokenKind::Ident(text.to_string()),
    }
}

pub fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

pub fn is_ident_continue(c: u8) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
