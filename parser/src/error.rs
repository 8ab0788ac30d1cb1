use lexer::LexError;
use model::{Program, Token, TokenKind};
use thiserror::Error;

/// Errors recorded by the parser, in the order they were found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer hit a character that starts no token
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: Token },

    /// The current token cannot start an expression
    #[error("no prefix parser for {found}")]
    NoPrefixParser { found: Token },

    #[error("{literal} can not be parsed as a base 10 integer")]
    InvalidInteger { literal: String },

    #[error("nesting deeper than {limit} levels at {found}")]
    NestingTooDeep { limit: usize, found: Token },
}

/// First statement-level error of a program, with the statements parsed
/// before it
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub partial: Program,
    pub error: ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: Token::new(TokenKind::Integer, "5"),
        };
        assert_eq!(err.to_string(), "expected '=', found integer '5'");

        let err = ParseError::NoPrefixParser {
            found: Token::symbol(TokenKind::Semicolon),
        };
        assert_eq!(err.to_string(), "no prefix parser for ';'");

        let err = ParseError::NestingTooDeep {
            limit: 256,
            found: Token::symbol(TokenKind::OpenParenthesis),
        };
        assert_eq!(err.to_string(), "nesting deeper than 256 levels at '('");

        let err = ParseError::from(LexError::new('@', 3));
        assert_eq!(err.to_string(), "illegal character '@' at offset 3");
    }
}
