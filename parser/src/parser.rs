use lexer::Lexer;
use model::{Program, Token, TokenKind};
use tracing::debug;

use crate::error::{ParseError, ParseFailure};
use crate::statements::StatementParser;

/// Deepest expression/block nesting accepted before parsing gives up
pub const MAX_NESTING_DEPTH: usize = 256;

/// Core parser struct that maintains parsing state.
///
/// Holds two tokens of lookahead pulled from the lexer and the ordered list
/// of every error recorded so far. One parser serves one input.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) current: Token,
    pub(crate) next: Token,
    errors: Vec<ParseError>,
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            next: Token::eof(),
            errors: Vec::new(),
            depth: 0,
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Every error recorded so far, including ones parsing recovered from
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse statements until end of input.
    ///
    /// Statements may be followed by a `;`. Parsing stops at the first
    /// statement that fails; the statements before it come back in
    /// [`ParseFailure::partial`]. The failing statement itself is dropped,
    /// even when part of it (say the name of a `let`) was already read.
    pub fn parse_program(&mut self) -> Result<Program, ParseFailure> {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => {
                    self.skip_semicolon();
                    statements.push(stmt);
                }
                Err(error) => {
                    return Err(ParseFailure {
                        partial: Program { statements },
                        error,
                    });
                }
            }
        }

        Ok(Program { statements })
    }

    /// Shift the lookahead by one token and return the token that was current.
    ///
    /// A lexical error is recorded and stands in the stream as an `Illegal`
    /// token, which no production accepts.
    pub(crate) fn advance(&mut self) -> Token {
        let pulled = match self.lexer.next_token() {
            Ok(token) => token,
            Err(err) => {
                let illegal = Token::new(TokenKind::Illegal, err.character.to_string());
                self.report(err.into());
                illegal
            }
        };
        let next = std::mem::replace(&mut self.next, pulled);
        std::mem::replace(&mut self.current, next)
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn next_is(&self, kind: TokenKind) -> bool {
        self.next.is(kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_semicolon(&mut self) {
        self.match_token(TokenKind::Semicolon);
    }

    /// Consume the current token if it is `kind`, otherwise record a mismatch
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current_is(kind) {
            Ok(self.advance())
        } else {
            Err(self.report(ParseError::UnexpectedToken {
                expected: kind,
                found: self.current.clone(),
            }))
        }
    }

    /// Run `parse` one nesting level deeper
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        self.enter()?;
        let result = parse(self);
        self.depth = depth;
        result
    }

    /// Go one level deeper, or record [`ParseError::NestingTooDeep`] once
    /// [`MAX_NESTING_DEPTH`] is reached so nested input cannot exhaust the
    /// stack while parsing, printing or dropping the tree
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.report(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                found: self.current.clone(),
            }));
        }
        self.depth += 1;
        Ok(())
    }

    /// Record `error` and hand it back for propagation
    pub(crate) fn report(&mut self, error: ParseError) -> ParseError {
        debug!(%error, "parse error");
        self.errors.push(error.clone());
        error
    }
}
