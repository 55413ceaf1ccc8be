//! Tokens and the arena that owns them.
//!
//! [`Span`] uses UTF-8 byte offsets into the original source and is half-open `[start, end)`.
//! Tokens never point at each other directly: `prev`/`next` are [`TokenId`] links into the
//! owning [`TokenArena`], recorded in original lexical order.

/// Index of a token inside a [`TokenArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Half-open byte span into the source string: `[start, end)`.
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /* Scalars */
    /// Plain scalar.
    String,
    /// `'...'`
    SingleQuote,
    /// `"..."`
    DoubleQuote,
    Integer,
    Float,
    Bool,
    Null,
    /// `.inf`
    Infinity,
    /// `.nan`
    Nan,

    /* Structural indicators */
    /// `?`
    MappingKey,
    /// `:`
    MappingValue,
    /// `-`
    SequenceEntry,
    /// `[`
    SequenceStart,
    /// `]`
    SequenceEnd,
    /// `{`
    MappingStart,
    /// `}`
    MappingEnd,
    /// `,`
    CollectEntry,
    /// `<<`
    MergeKey,

    /* Node properties */
    /// `&name`
    Anchor,
    /// `*name`
    Alias,
    /// `!tag`
    Tag,

    /* Block scalar headers */
    /// `|`
    Literal,
    /// `>`
    Folded,

    /* Document markers */
    /// `%YAML ...`
    Directive,
    /// `---`
    DocumentHeader,
    /// `...`
    DocumentEnd,

    /// `# ...`
    Comment,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::SingleQuote
                | TokenKind::DoubleQuote
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::Null
                | TokenKind::Infinity
                | TokenKind::Nan
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with its source span and its lexical neighbors.
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub prev: Option<TokenId>,
    pub next: Option<TokenId>,
}

impl Token {
    /// Creates an unlinked token.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
            prev: None,
            next: None,
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }
}

/// Owned storage for every token of one parse.
///
/// Ids are stable for the lifetime of the arena; tokens are never removed.
#[derive(Debug, Clone, Default)]
pub struct TokenArena {
    tokens: Vec<Token>,
    last_pushed: Option<TokenId>,
}

impl TokenArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` in lexical order, linking it to the previously pushed token.
    ///
    /// Any links already set on `token` are overwritten.
    pub fn push(&mut self, mut token: Token) -> TokenId {
        token.prev = self.last_pushed;
        token.next = None;
        let id = self.alloc(token);
        if let Some(prev) = self.last_pushed {
            self.get_mut(prev).next = Some(id);
        }
        self.last_pushed = Some(id);
        id
    }

    /// Stores `token` as-is without touching any links.
    pub fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(token);
        id
    }

    /// Panics if `id` was not produced by this arena.
    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        (0..self.tokens.len() as u32).map(TokenId)
    }

    /// Follows `next` links starting at (and including) `id`.
    pub fn walk_forward(&self, id: TokenId) -> LinkWalk<'_> {
        LinkWalk {
            arena: self,
            cur: Some(id),
            forward: true,
        }
    }

    /// Follows `prev` links starting at (and including) `id`.
    pub fn walk_backward(&self, id: TokenId) -> LinkWalk<'_> {
        LinkWalk {
            arena: self,
            cur: Some(id),
            forward: false,
        }
    }
}

impl FromIterator<Token> for TokenArena {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut arena = TokenArena::new();
        for token in iter {
            arena.push(token);
        }
        arena
    }
}

/// Iterator over a chain of token links.
pub struct LinkWalk<'a> {
    arena: &'a TokenArena,
    cur: Option<TokenId>,
    forward: bool,
}

impl<'a> Iterator for LinkWalk<'a> {
    type Item = (TokenId, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let tok = self.arena.get(id);
        self.cur = if self.forward { tok.next } else { tok.prev };
        Some((id, tok))
    }
}
