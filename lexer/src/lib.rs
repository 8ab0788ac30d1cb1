mod error;
mod keywords;
mod state_machine;
#[cfg(test)]
mod property_tests;

use model::Token;

pub use error::LexError;
pub use state_machine::Lexer;

/// Lex a whole input, stopping at the first illegal character.
///
/// The returned tokens do not include the end-of-input marker.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}
