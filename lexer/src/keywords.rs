use model::{Token, TokenKind};

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("let", TokenKind::Let),
    ("fun", TokenKind::Function),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Keyword token for `text`, or an identifier carrying it
pub(crate) fn keyword_or_identifier(text: &str) -> Token {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == text)
        .map(|&(_, kind)| Token::symbol(kind))
        .unwrap_or_else(|| Token::new(TokenKind::Identifier, text))
}

/// First characters of the two-character operators
pub(crate) fn starts_compound_operator(ch: char) -> bool {
    matches!(ch, '&' | '!' | '=' | '|')
}

pub(crate) fn two_char_operator(first: char, second: Option<char>) -> Option<TokenKind> {
    match (first, second?) {
        ('=', '=') => Some(TokenKind::EqualEqual),
        ('!', '=') => Some(TokenKind::BangEqual),
        ('&', '&') => Some(TokenKind::AndAnd),
        ('|', '|') => Some(TokenKind::OrOr),
        _ => None,
    }
}

pub(crate) fn single_char_atom(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '=' => TokenKind::Assign,
        '!' => TokenKind::Bang,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '/' => TokenKind::Slash,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '(' => TokenKind::OpenParenthesis,
        ')' => TokenKind::CloseParenthesis,
        '{' => TokenKind::OpenBrace,
        '}' => TokenKind::CloseBrace,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        _ => return None,
    };
    Some(kind)
}
