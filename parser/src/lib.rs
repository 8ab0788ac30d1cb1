// Parser module: Converts the lexer's token stream into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, two-token lookahead and the program loop
// - precedence.rs: Binding power of each operator token
// - expressions.rs: Expression parsing with precedence climbing (prefix and infix rules)
// - statements.rs: Statement parsing (let, return, blocks, expression statements)
// - error.rs: ParseError and ParseFailure

mod error;
mod expressions;
mod parser;
mod precedence;
mod statements;

use lexer::Lexer;
use model::Program;

pub use error::{ParseError, ParseFailure};
pub use parser::{MAX_NESTING_DEPTH, Parser};
pub use precedence::Precedence;

/// Parse source text into a Program AST
///
/// # Returns
/// * `Ok(Program)` - Every statement parsed and no error was recorded
/// * `Err(Vec<ParseError>)` - Every error recorded, in order, including
///   lexical errors and recovered integer conversions
pub fn parse(input: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(input));
    match parser.parse_program() {
        Ok(program) if parser.errors().is_empty() => Ok(program),
        _ => Err(parser.into_errors()),
    }
}
