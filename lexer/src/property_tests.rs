//! Property-based tests for the lexer.
//!
//! 1. **Lexer never panics** on arbitrary input
//! 2. **Lexer always terminates**: pulling tokens reaches end-of-input within
//!    one call per input byte, errors included
//! 3. **Lexer is deterministic**
//! 4. **Valid fragments lex cleanly** and re-lex to the same tokens when
//!    joined by whitespace

use proptest::prelude::*;

use crate::{Lexer, lex};
use model::TokenKind;

const VALID_FRAGMENTS: &[&str] = &[
    "42", "x", "_tmp", "let", "fun", "true", "false", "if", "else", "return", "=", "==", "!",
    "!=", "&&", "||", "+", "-", "*", "/", "<", ">", "(", ")", "{", "}", ",", ";",
];

fn valid_source() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VALID_FRAGMENTS), 0..40)
}

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC{0,200}") {
        let _ = lex(&input);
    }

    #[test]
    fn lexer_reaches_eof(input in "\\PC{0,200}") {
        let mut lexer = Lexer::new(&input);
        let mut reached_eof = false;
        for _ in 0..=input.len() {
            if let Ok(token) = lexer.next_token() {
                if token.is(TokenKind::Eof) {
                    reached_eof = true;
                    break;
                }
            }
        }
        prop_assert!(reached_eof, "no end-of-input for {:?}", input);
        prop_assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    }

    #[test]
    fn lexer_is_deterministic(input in "\\PC{0,200}") {
        let first: Vec<_> = Lexer::new(&input).collect();
        let second: Vec<_> = Lexer::new(&input).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn valid_fragments_lex_one_token_each(fragments in valid_source()) {
        let input = fragments.join(" ");
        let tokens = lex(&input).expect("valid fragments should lex");
        prop_assert_eq!(tokens.len(), fragments.len());
        for (token, fragment) in tokens.iter().zip(&fragments) {
            prop_assert_eq!(token.literal.as_str(), *fragment);
        }
    }
}
