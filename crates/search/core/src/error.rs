//! Validation errors raised while constructing search patterns.
//!
//! Grid lookups and matching never fail; malformed grids resolve through the
//! empty sentinel and simply produce zero matches. Only pattern definitions
//! that cannot be evaluated are rejected, and they are rejected up front.

/// Reasons a word cannot be used as the arm of a crossing pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("crossing word needs a center character, got even length {len}")]
    EvenLength { len: usize },

    #[error("crossing word must be at least 3 characters, got {len}")]
    TooShort { len: usize },
}
