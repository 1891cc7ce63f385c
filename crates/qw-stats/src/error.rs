// Errors raised while interpreting stat and item vocabulary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    /// A stat update addressed a slot past the fixed table. This points at a
    /// malformed stream or a peer with a larger stat bound.
    #[error("stat index {index} out of range (max {max})")]
    IndexOutOfRange { index: usize, max: usize },
    #[error("unknown weapon number {0}")]
    UnknownWeapon(i32),
    #[error("stat label table has {len} entries, need at least {required}")]
    LabelTableTooShort { len: usize, required: usize },
}
