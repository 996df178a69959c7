use super::ast::{Command, Expr, Statement, Target};
use super::token::{Span, Token, TokenKind};
use crate::error::SyntaxError;

/// Recursive-descent parser over a token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse_script(&mut self) -> Result<Vec<Statement>, SyntaxError> {
        let mut body = Vec::new();
        loop {
            self.skip_separators();
            if self.is_at_end() {
                break;
            }
            body.push(self.parse_statement()?);
            match self.peek() {
                TokenKind::Separator | TokenKind::Eof => {}
                other => {
                    return Err(self.error_here(format!(
                        "expected end of command, found {}",
                        other.describe()
                    )));
                }
            }
        }
        Ok(body)
    }

    fn peek(&self) -> &TokenKind {
        &self.current().kind
    }

    fn peek_next(&self) -> &TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&TokenKind::Eof, |token| &token.kind)
    }

    fn current(&self) -> &Token {
        // The scanner always ends the stream with `Eof`, which is never
        // advanced past.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek(), TokenKind::Eof)
    }

    fn expect(&mut self, expected: &TokenKind) -> Result<Token, SyntaxError> {
        if self.peek() == expected {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!(
                "expected {}, found {}",
                expected.describe(),
                self.peek().describe()
            )))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<Target, SyntaxError> {
        match self.peek().clone() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok(Target { name, span })
            }
            other => Err(self.error_here(format!(
                "expected {what}, found {}",
                other.describe()
            ))),
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), TokenKind::Separator) {
            self.advance();
        }
    }

    fn error_here(&self, message: String) -> SyntaxError {
        let span = self.current().span;
        SyntaxError::new(message, span.start, span.len().max(1))
    }

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current().span;
        let command = match self.peek().clone() {
            TokenKind::Let => {
                self.advance();
                let name = self.expect_ident("an array name")?.name;
                self.expect(&TokenKind::Assign)?;
                let value = self.parse_expr()?;
                Command::Let { name, value }
            }
            TokenKind::Delete => {
                self.advance();
                let target = self.expect_ident("an array name")?;
                let key = self.parse_accessor()?;
                Command::Delete { target, key }
            }
            TokenKind::Ident(word)
                if matches!(self.peek_next(), TokenKind::Ident(_))
                    && matches!(word.as_str(), "show" | "values" | "keys" | "json") =>
            {
                self.advance();
                let target = self.expect_ident("an array name")?;
                match word.as_str() {
                    "values" => Command::Values(target),
                    "keys" => Command::Keys(target),
                    "json" => Command::Json(target),
                    _ => Command::Show(target),
                }
            }
            TokenKind::Ident(_) if !matches!(self.peek_next(), TokenKind::In) => {
                self.parse_target_command()?
            }
            _ => {
                let key = self.parse_expr()?;
                self.expect(&TokenKind::In)?;
                let target = self.expect_ident("an array name")?;
                Command::Has { key, target }
            }
        };
        let end = self.tokens[self.pos.saturating_sub(1)].span;
        Ok(Statement {
            command,
            span: start.to(end),
        })
    }

    /// Everything that starts with an array name: calls, reads, writes and a
    /// bare name.
    fn parse_target_command(&mut self) -> Result<Command, SyntaxError> {
        let target = self.expect_ident("an array name")?;
        if !matches!(self.peek(), TokenKind::Dot | TokenKind::LeftBracket) {
            return Ok(Command::Show(target));
        }

        if matches!(self.peek(), TokenKind::Dot)
            && matches!(self.tokens.get(self.pos + 2).map(|t| &t.kind), Some(TokenKind::LeftParen))
        {
            self.advance();
            let method = self.expect_ident("a method name")?.name;
            self.expect(&TokenKind::LeftParen)?;
            let args = self.parse_list(&TokenKind::RightParen)?;
            return Ok(Command::Call {
                target,
                method,
                args,
            });
        }

        let key = self.parse_accessor()?;
        if matches!(self.peek(), TokenKind::Assign) {
            self.advance();
            let value = self.parse_expr()?;
            Ok(Command::Write { target, key, value })
        } else {
            Ok(Command::Read { target, key })
        }
    }

    /// `.name` or `[expr]`.
    fn parse_accessor(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            TokenKind::Dot => {
                self.advance();
                let name = self.expect_ident("a property name")?.name;
                Ok(Expr::String(name))
            }
            TokenKind::LeftBracket => {
                self.advance();
                let key = self.parse_expr()?;
                self.expect(&TokenKind::RightBracket)?;
                Ok(key)
            }
            other => Err(self.error_here(format!(
                "expected `.` or `[`, found {}",
                other.describe()
            ))),
        }
    }

    fn parse_list(&mut self, close: &TokenKind) -> Result<Vec<Expr>, SyntaxError> {
        let mut items = Vec::new();
        loop {
            self.skip_separators();
            if self.peek() == close {
                self.advance();
                return Ok(items);
            }
            items.push(self.parse_expr()?);
            self.skip_separators();
            if !matches!(self.peek(), TokenKind::Comma) {
                self.expect(close)?;
                return Ok(items);
            }
            self.advance();
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.advance();
        Ok(match token.kind {
            TokenKind::Number(n) => Expr::Number(n),
            TokenKind::String(s) => Expr::String(s),
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),
            TokenKind::Null => Expr::Null,
            TokenKind::Undefined => Expr::Undefined,
            TokenKind::Minus => match self.parse_expr()? {
                Expr::Number(n) => Expr::Number(-n),
                _ => {
                    return Err(SyntaxError::new(
                        "`-` must be followed by a number",
                        token.span.start,
                        1,
                    ));
                }
            },
            TokenKind::Ident(name) => match name.as_str() {
                "NaN" => Expr::Number(f64::NAN),
                "Infinity" => Expr::Number(f64::INFINITY),
                _ => Expr::Ref(Target {
                    name,
                    span: token.span,
                }),
            },
            TokenKind::LeftBracket => self.parse_array_literal()?,
            other => {
                return Err(SyntaxError::new(
                    format!("expected a value, found {}", other.describe()),
                    token.span.start,
                    token.span.len().max(1),
                ));
            }
        })
    }

    /// The body of an array literal after `[`. A comma with no element
    /// before it leaves a hole; a single trailing comma does not.
    fn parse_array_literal(&mut self) -> Result<Expr, SyntaxError> {
        let mut elements = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                TokenKind::RightBracket => {
                    self.advance();
                    return Ok(Expr::Array(elements));
                }
                TokenKind::Comma => {
                    self.advance();
                    elements.push(None);
                    continue;
                }
                _ => {}
            }
            elements.push(Some(self.parse_expr()?));
            self.skip_separators();
            match self.peek() {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RightBracket => {}
                _ => {
                    let Span { start, end } = self.current().span;
                    return Err(SyntaxError::new(
                        format!("expected `,` or `]`, found {}", self.peek().describe()),
                        start,
                        (end - start).max(1),
                    ));
                }
            }
        }
    }
}
