use thiserror::Error;

/// A character that starts no token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal character {character:?} at offset {offset}")]
pub struct LexError {
    pub character: char,
    /// Byte offset of `character` in the source
    pub offset: usize,
}

impl LexError {
    pub fn new(character: char, offset: usize) -> Self {
        Self { character, offset }
    }
}
