use model::TokenKind;

/// Binding power of an operator token, lowest first.
///
/// | Level         | Tokens      |
/// |---------------|-------------|
/// | `LogicalOr`   | `\|\|`      |
/// | `LogicalAnd`  | `&&`        |
/// | `Equals`      | `==` `!=`   |
/// | `LessGreater` | `<` `>`     |
/// | `Sum`         | `+` `-`     |
/// | `Product`     | `*` `/`     |
/// | `Prefix`      | unary `!` `-` |
/// | `Call`        | `(`         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    LogicalOr,
    LogicalAnd,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    /// Precedence of `kind` in infix position; tokens that continue no
    /// expression are `Lowest`
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::OrOr => Precedence::LogicalOr,
            TokenKind::AndAnd => Precedence::LogicalAnd,
            TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
            TokenKind::Less | TokenKind::Greater => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::OpenParenthesis => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}
