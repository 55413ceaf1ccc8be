//! Token cursor and path tracking for a recursive-descent YAML parser.
//!
//! Pipeline: tokenizer → [`TokenArena`] → [`ParseContext`] → grammar.
//! The context owns the tokens for one parse. The grammar advances the [`TokenCursor`] and,
//! independently, pushes/pops [`PathTracker`] segments as it descends, so errors can name
//! a location like `$.spec.containers[0].image`.
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.

mod context;
mod cursor;
mod error;
mod mode;
mod path;
mod tests;
mod token;

pub use context::ParseContext;
pub use cursor::TokenCursor;
pub use error::ContextError;
pub use mode::{Mode, ParseOptions};
pub use path::{PATH_SPECIAL_CHARS, PathTracker, ROOT_SEGMENT, normalize_segment};
pub use token::{LinkWalk, Span, Token, TokenArena, TokenId, TokenKind};
