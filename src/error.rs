use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Support was queried before any sequence IDs were assigned.
    #[error("support is unknown: sequence IDs have not been assigned")]
    SupportUnknown,

    #[error("itemset index {index} out of range for pattern of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Relative support over a database with no sequences.
    #[error("relative support requires a non-zero sequence count")]
    EmptyDatabase,
}
