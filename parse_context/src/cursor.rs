//! Cursor over the active token sequence.
//!
//! The cursor owns the [`TokenArena`] and an ordered view of token ids (the *active
//! sequence*). When comments are disabled the active sequence skips them, but the arena
//! keeps every token with the links the tokenizer gave it.
//!
//! # Index semantics
//! - `position` is an index into the active sequence, always in `[0, len]`.
//! - `position == len` means the stream is exhausted.
//! - Every read is total: running off either end yields `None`.
//!
//! # Comment policy
//! - [`TokenCursor::advance`] refuses to move off a comment; grammar code consumes
//!   comments explicitly with [`TokenCursor::advance_raw`].
//! - Lookahead (`peek_*`) is never blocked by comments.

use crate::error::ContextError;
use crate::mode::Mode;
use crate::token::{Token, TokenArena, TokenId};

pub struct TokenCursor {
    arena: TokenArena,
    active: Vec<TokenId>,
    pos: usize,
    mode: Mode,
}

impl TokenCursor {
    pub fn new(arena: TokenArena, mode: Mode) -> Self {
        let active: Vec<TokenId> = if mode.contains(Mode::PARSE_COMMENTS) {
            arena.ids().collect()
        } else {
            // Filtered comments keep their links so callers holding one can still walk
            // the full lexical stream.
            arena
                .ids()
                .filter(|&id| !arena.get(id).is_comment())
                .collect()
        };
        tracing::debug!(
            total = arena.len(),
            active = active.len(),
            comments = mode.contains(Mode::PARSE_COMMENTS),
            "token cursor created"
        );
        TokenCursor {
            arena,
            active,
            pos: 0,
            mode,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn arena(&self) -> &TokenArena {
        &self.arena
    }

    pub fn into_arena(self) -> TokenArena {
        self.arena
    }

    pub fn token(&self, id: TokenId) -> &Token {
        self.arena.get(id)
    }

    pub fn active_ids(&self) -> &[TokenId] {
        &self.active
    }

    pub fn active_tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.active.iter().map(|&id| self.arena.get(id))
    }

    fn at(&self, idx: usize) -> Option<&Token> {
        self.active.get(idx).map(|&id| self.arena.get(id))
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.active.len()
    }

    pub fn current_id(&self) -> Option<TokenId> {
        self.active.get(self.pos).copied()
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.at(self.pos)
    }

    pub fn previous_token(&self) -> Option<&Token> {
        self.at(self.pos.checked_sub(1)?)
    }

    pub fn peek_next(&self) -> Option<&Token> {
        self.at(self.pos + 1)
    }

    pub fn peek_second(&self) -> Option<&Token> {
        self.at(self.pos + 2)
    }

    /// First non-comment token strictly after the current position.
    pub fn peek_next_non_comment(&self) -> Option<&Token> {
        self.nth_non_comment_after_current(0)
    }

    /// Second non-comment token strictly after the current position.
    pub fn peek_second_non_comment(&self) -> Option<&Token> {
        self.nth_non_comment_after_current(1)
    }

    fn nth_non_comment_after_current(&self, n: usize) -> Option<&Token> {
        self.active
            .iter()
            .skip(self.pos + 1)
            .map(|&id| self.arena.get(id))
            .filter(|tok| !tok.is_comment())
            .nth(n)
    }

    pub fn is_comments_enabled(&self) -> bool {
        self.mode.contains(Mode::PARSE_COMMENTS)
    }

    pub fn is_current_comment(&self) -> bool {
        self.current_token().is_some_and(Token::is_comment)
    }

    /// Moves forward by `n`, clamped to the end of the sequence.
    pub fn advance_raw(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.active.len());
    }

    /// Like [`advance_raw`](Self::advance_raw), but a no-op while the current token is a comment.
    pub fn advance(&mut self, n: usize) {
        if self.is_current_comment() {
            return;
        }
        self.advance_raw(n);
    }

    /// Splices `token` into the active sequence so it becomes the element at `position`.
    ///
    /// - `position == len` appends: the new token links back to the former last token.
    /// - `position < len` places it before the displaced token and links both neighbors.
    /// - `position > len` is rejected and leaves the sequence untouched.
    ///
    /// Links already present on `token` are replaced. The cursor position is not adjusted.
    pub fn insert_at(&mut self, position: usize, token: Token) -> Result<TokenId, ContextError> {
        let len = self.active.len();
        if position > len {
            tracing::warn!(position, len, "rejected out-of-range token insertion");
            return Err(ContextError::InsertOutOfRange { position, len });
        }

        let prev = position.checked_sub(1).map(|i| self.active[i]);
        let next = self.active.get(position).copied();

        let id = self.arena.alloc(Token {
            prev,
            next,
            ..token
        });
        if let Some(prev) = prev {
            self.arena.get_mut(prev).next = Some(id);
        }
        if let Some(next) = next {
            self.arena.get_mut(next).prev = Some(id);
        }
        self.active.insert(position, id);

        tracing::trace!(position, len = self.active.len(), kind = ?self.arena.get(id).kind, "inserted token");
        Ok(id)
    }
}
