use std::fmt;

/// Lexical category of a token
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,
    Identifier,
    Integer,
    // Keywords
    True,
    False,
    Let,
    Function,
    If,
    Else,
    Return,
    // Operators
    Assign,      // =
    Plus,        // +
    Minus,       // -
    Asterisk,    // *
    Slash,       // /
    Bang,        // !
    Less,        // <
    Greater,     // >
    EqualEqual,  // ==
    BangEqual,   // !=
    AndAnd,      // &&
    OrOr,        // ||
    // Punctuation
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    Comma,
    Semicolon,
}

impl TokenKind {
    /// Fixed spelling of keywords, operators and punctuation
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Eof | TokenKind::Illegal | TokenKind::Identifier | TokenKind::Integer => {
                return None;
            }
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Let => "let",
            TokenKind::Function => "fun",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::EqualEqual => "==",
            TokenKind::BangEqual => "!=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::OpenParenthesis => "(",
            TokenKind::CloseParenthesis => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Illegal => f.write_str("illegal token"),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Integer => f.write_str("integer"),
            other => write!(f, "'{}'", other.symbol().unwrap_or_default()),
        }
    }
}

/// A single lexical unit: its kind plus the source text it was read from
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub const EOF_LITERAL: &'static str = "EOF";

    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Token whose literal is the kind's own spelling
    pub fn symbol(kind: TokenKind) -> Self {
        Token::new(kind, kind.symbol().unwrap_or_default())
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, Self::EOF_LITERAL)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Illegal => {
                write!(f, "{} '{}'", self.kind, self.literal)
            }
            kind => write!(f, "{kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_tokens_carry_their_spelling() {
        assert_eq!(Token::symbol(TokenKind::BangEqual).literal, "!=");
        assert_eq!(Token::symbol(TokenKind::Function).literal, "fun");
        assert_eq!(Token::symbol(TokenKind::Identifier).literal, "");
    }

    #[test]
    fn display_for_diagnostics() {
        assert_eq!(Token::new(TokenKind::Identifier, "x").to_string(), "identifier 'x'");
        assert_eq!(Token::new(TokenKind::Integer, "42").to_string(), "integer '42'");
        assert_eq!(Token::symbol(TokenKind::Assign).to_string(), "'='");
        assert_eq!(Token::eof().to_string(), "end of input");
        assert_eq!(TokenKind::CloseParenthesis.to_string(), "')'");
    }
}
