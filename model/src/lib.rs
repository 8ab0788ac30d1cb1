// Shared data model: the token stream produced by the lexer and the AST
// produced by the parser.

mod ast;
mod token;

pub use ast::{BlockStatement, Expression, Identifier, InfixOp, PrefixOp, Program, Statement};
pub use token::{Token, TokenKind};
