//! The per-parse composite handed to the grammar.
//!
//! A [`ParseContext`] pairs a [`TokenCursor`] with a [`PathTracker`]. The two move
//! independently: token position tracks the lexical stream, the path tracks descent into
//! the document tree. The common grammar calls are forwarded here so rules can take a
//! single `&mut ParseContext`.

use crate::cursor::TokenCursor;
use crate::error::ContextError;
use crate::mode::{Mode, ParseOptions};
use crate::path::PathTracker;
use crate::token::{Token, TokenArena, TokenId};

pub struct ParseContext {
    cursor: TokenCursor,
    path: PathTracker,
}

impl ParseContext {
    pub fn new(arena: TokenArena, mode: Mode) -> Self {
        ParseContext {
            cursor: TokenCursor::new(arena, mode),
            path: PathTracker::new(),
        }
    }

    pub fn with_options(arena: TokenArena, opts: &ParseOptions) -> Self {
        Self::new(arena, Mode::from(opts))
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut TokenCursor {
        &mut self.cursor
    }

    pub fn path(&self) -> &PathTracker {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut PathTracker {
        &mut self.path
    }

    pub fn into_arena(self) -> TokenArena {
        self.cursor.into_arena()
    }

    /* Token cursor */

    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.cursor.current_token()
    }

    pub fn previous_token(&self) -> Option<&Token> {
        self.cursor.previous_token()
    }

    pub fn peek_next(&self) -> Option<&Token> {
        self.cursor.peek_next()
    }

    pub fn peek_second(&self) -> Option<&Token> {
        self.cursor.peek_second()
    }

    pub fn peek_next_non_comment(&self) -> Option<&Token> {
        self.cursor.peek_next_non_comment()
    }

    pub fn peek_second_non_comment(&self) -> Option<&Token> {
        self.cursor.peek_second_non_comment()
    }

    pub fn is_comments_enabled(&self) -> bool {
        self.cursor.is_comments_enabled()
    }

    pub fn is_current_comment(&self) -> bool {
        self.cursor.is_current_comment()
    }

    pub fn advance(&mut self, n: usize) {
        self.cursor.advance(n);
    }

    pub fn advance_raw(&mut self, n: usize) {
        self.cursor.advance_raw(n);
    }

    pub fn insert_at(&mut self, position: usize, token: Token) -> Result<TokenId, ContextError> {
        self.cursor.insert_at(position, token)
    }

    /* Path tracker */

    pub fn push_field(&mut self, name: &str) {
        self.path.push_field(name);
    }

    pub fn push_index(&mut self, idx: usize) {
        self.path.push_index(idx);
    }

    pub fn pop_path(&mut self) -> bool {
        self.path.pop()
    }

    pub fn current_path(&mut self) -> &str {
        self.path.current_path()
    }

    pub fn peek_child_path(&mut self, name: &str) -> String {
        self.path.peek_child_path(name)
    }

    pub fn peek_index_path(&mut self, idx: usize) -> String {
        self.path.peek_index_path(idx)
    }

    /// Runs `f` with `name` pushed, popping it afterwards.
    pub fn with_field<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_field(name);
        let out = f(self);
        self.path.pop();
        out
    }

    /// Runs `f` with `[idx]` pushed, popping it afterwards.
    pub fn with_index<R>(&mut self, idx: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push_index(idx);
        let out = f(self);
        self.path.pop();
        out
    }
}
