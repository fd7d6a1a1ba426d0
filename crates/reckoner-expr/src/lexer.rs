//! Expression lexer
//!
//! Turns raw text into a flat token stream. The input is checked against a
//! character whitelist before any scanning happens.

use crate::error::{ExprError, ExprResult};
use lazy_regex::regex_is_match;
use std::fmt;

/// Character whitelist applied before tokenizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charset {
    /// Digits, `+ - * / ( ) . %` and whitespace (basic calculator keypad)
    Basic,
    /// Adds ASCII letters, `_`, `,` and `^` for functions, constants and the variable
    #[default]
    Scientific,
}

impl Charset {
    /// Check that every character of `input` belongs to this charset
    pub fn permits(self, input: &str) -> bool {
        match self {
            Charset::Basic => regex_is_match!(r"^[0-9+\-*/().%\s]*$", input),
            Charset::Scientific => regex_is_match!(r"^[0-9A-Za-z_+\-*/().,^%\s]*$", input),
        }
    }
}

/// Arithmetic operator symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
}

impl Operator {
    /// Source symbol for this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Percent => '%',
            Operator::Caret => '^',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '%' => Some(Operator::Percent),
            '^' => Some(Operator::Caret),
            _ => None,
        }
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// Function, constant or variable name
    Identifier(String),
    Operator(Operator),
    LeftParen,
    RightParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => f.write_str(name),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
        }
    }
}

/// A token with the byte offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub offset: usize,
}

/// Tokenize `input` after checking it against `charset`
///
/// # Example
/// ```rust
/// use reckoner_expr::lexer::{tokenize, Charset, Token};
///
/// let tokens = tokenize("sin(x)", Charset::Scientific).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].token, Token::Identifier("sin".into()));
/// ```
pub fn tokenize(input: &str, charset: Charset) -> ExprResult<Vec<SpannedToken>> {
    if !charset.permits(input) {
        return Err(ExprError::UnsupportedCharacters);
    }

    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_token(&mut self) -> ExprResult<Option<SpannedToken>> {
        self.skip_whitespace();

        let offset = self.pos;
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = if let Some(op) = Operator::from_char(c) {
            self.advance();
            Token::Operator(op)
        } else if c == '(' {
            self.advance();
            Token::LeftParen
        } else if c == ')' {
            self.advance();
            Token::RightParen
        } else if c == ',' {
            self.advance();
            Token::Comma
        } else if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            self.scan_number()?
        } else if c.is_ascii_alphabetic() || c == '_' {
            self.scan_identifier()
        } else {
            return Err(ExprError::UnexpectedCharacter { ch: c, offset });
        };

        Ok(Some(SpannedToken { token, offset }))
    }

    fn scan_number(&mut self) -> ExprResult<Token> {
        let start = self.pos;

        self.skip_digits();

        if self.peek_char() == Some('.') {
            self.advance();
            self.skip_digits();
        }

        // Exponent only when digits actually follow, so `2E` stays `2` then `E`
        if matches!(self.peek_char(), Some('e' | 'E')) {
            let digit_at = match self.peek_char_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_char_at(digit_at).map_or(false, |c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let text = &self.input[start..self.pos];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ExprError::InvalidNumber {
                text: text.to_string(),
                offset: start,
            })
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Token::Identifier(self.input[start..self.pos].to_string())
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }
}
