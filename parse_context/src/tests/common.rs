use crate::token::{Span, Token, TokenArena, TokenKind};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a linked arena, laying tokens out back to back with one space between them.
pub fn arena(tokens: &[(TokenKind, &str)]) -> TokenArena {
    let mut arena = TokenArena::new();
    let mut offset = 0u32;
    for (kind, value) in tokens {
        let end = offset + value.len() as u32;
        arena.push(Token::new(*kind, *value, Span::new(offset, end)));
        offset = end + 1;
    }
    arena
}

pub fn synthetic(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value, Span::default())
}

pub fn values<'a>(tokens: impl Iterator<Item = &'a Token>) -> Vec<&'a str> {
    tokens.map(|t| t.value.as_str()).collect()
}

/// `a: 1 # note` followed by `b: 2`.
pub fn mapping_with_comment() -> TokenArena {
    use TokenKind::*;
    arena(&[
        (String, "a"),
        (MappingValue, ":"),
        (Integer, "1"),
        (Comment, "# note"),
        (String, "b"),
        (MappingValue, ":"),
        (Integer, "2"),
    ])
}
