use model::{Token, TokenKind};
use tracing::trace;

use crate::error::LexError;
use crate::keywords::{keyword_or_identifier, single_char_atom, starts_compound_operator, two_char_operator};

/// Pull-based scanner over a source string.
///
/// Each call to [`Lexer::next_token`] skips whitespace, recognises one token
/// and moves the cursor past it. Once the input is exhausted every further
/// call returns the end-of-input token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    token_start: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
            finished: false,
        }
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.pos;

        let Some(ch) = self.peek() else {
            return Ok(Token::eof());
        };

        let token = match ch {
            c if starts_compound_operator(c) => self.lex_operator(c)?,
            c if single_char_atom(c).is_some() => self.lex_atom(c)?,
            'a'..='z' | 'A'..='Z' | '_' => self.lex_word(),
            '0'..='9' => self.lex_number(),
            other => {
                // Step over the character so the caller can keep pulling
                self.pos += other.len_utf8();
                return Err(LexError::new(other, self.token_start));
            }
        };

        trace!(kind = ?token.kind, literal = %token.literal, offset = self.token_start, "token");
        Ok(token)
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Character `offset` bytes past the cursor, without advancing
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset..)?.chars().next()
    }

    fn current_slice(&self) -> &'a str {
        &self.input[self.token_start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn lex_operator(&mut self, ch: char) -> Result<Token, LexError> {
        // Two-character operators first so `==` never splits into `=` `=`
        if let Some(kind) = two_char_operator(ch, self.peek_at(1)) {
            self.pos += 2;
            return Ok(Token::symbol(kind));
        }
        self.lex_atom(ch)
    }

    fn lex_atom(&mut self, ch: char) -> Result<Token, LexError> {
        self.pos += 1;
        single_char_atom(ch)
            .map(Token::symbol)
            .ok_or_else(|| LexError::new(ch, self.token_start))
    }

    fn lex_word(&mut self) -> Token {
        while let Some('a'..='z' | 'A'..='Z' | '_') = self.peek() {
            self.pos += 1;
        }
        keyword_or_identifier(self.current_slice())
    }

    fn lex_number(&mut self) -> Token {
        while let Some('0'..='9') = self.peek() {
            self.pos += 1;
        }
        Token::new(TokenKind::Integer, self.current_slice())
    }
}

/// Yields tokens up to, not including, the end-of-input token.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => {
                self.finished = true;
                None
            }
            other => Some(other),
        }
    }
}
