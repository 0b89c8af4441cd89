use thiserror::Error;

/// Errors raised while building an entity from an external representation.
#[derive(Error, Debug)]
pub enum EntityError {
    /// A positional wire struct had the wrong number of elements.
    #[error("{entity} wire struct has {found} elements, expected {expected}")]
    StructArity {
        /// Entity being decoded.
        entity: &'static str,
        /// Declared number of wire fields.
        expected: usize,
        /// Number of elements supplied.
        found: usize,
    },
    /// Input was neither a keyed object nor a positional array.
    #[error("{entity} expects a keyed object or a wire array, found {found}")]
    UnexpectedShape {
        /// Entity being decoded.
        entity: &'static str,
        /// JSON type actually supplied.
        found: &'static str,
    },
    /// The canonical string form could not be parsed.
    #[error("canonical string decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}
