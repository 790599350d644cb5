//! Error types for every layer of the analysis.
//!
//! Only [`FragmentError`] ever reaches the caller of
//! [`analyze_fragment`](crate::analyze_fragment); the rest are recorded in the report.

/// Failures of the bit-level cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitError {
    #[error("Attempted to read {requested} bits with only {remaining} remaining")]
    Overrun { requested: usize, remaining: usize },

    #[error("Cannot read {0} bits into a 32-bit value")]
    WidthTooLarge(u32),

    #[error("Malformed varint: more than {0} bytes")]
    MalformedVarint(usize),
}

/// Failures while framing a fragment into chunks. These abort the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("Unexpected end of fragment while reading {field} at offset {offset}")]
    UnexpectedEnd { field: &'static str, offset: usize },

    #[error("Malformed varint for {field} at offset {offset}")]
    MalformedVarint { field: &'static str, offset: usize },

    #[error(
        "Chunk #{index} declares {declared} bytes at offset {offset} but only {remaining} remain"
    )]
    Truncated {
        index: usize,
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("Demo file header is truncated: expected {expected} bytes, got {actual}")]
    InvalidHeader { expected: usize, actual: usize },
}

/// Failures of a single decode attempt through a type registry.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unknown message type: {0}")]
    UnknownType(u32),

    #[error("No decoder available for {name} ({code})")]
    Unsupported { code: u32, name: &'static str },

    #[error("Failed to decode {name}: {source}")]
    Protobuf {
        name: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    #[error("Failed to convert {name} into a report value: {source}")]
    Convert {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Structural failures that end a packet walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    #[error("Insufficient bits for packet type: {remaining} remaining")]
    InsufficientBits { remaining: usize },

    #[error("Declared size {declared} exceeds remaining bytes {remaining}")]
    SizeOverrun { declared: usize, remaining: usize },

    #[error(transparent)]
    Cursor(#[from] BitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_message() {
        assert_eq!(
            DecodeError::UnknownType(999).to_string(),
            "Unknown message type: 999"
        );
    }

    #[test]
    fn test_walk_error_wraps_cursor_error() {
        let err: WalkError = BitError::Overrun {
            requested: 8,
            remaining: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Attempted to read 8 bits with only 2 remaining"
        );
    }
}
