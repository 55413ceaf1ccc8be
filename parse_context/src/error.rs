use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("cannot insert token at position {position}: active sequence has {len} tokens")]
    InsertOutOfRange { position: usize, len: usize },
}
