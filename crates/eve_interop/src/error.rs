//! Boundary-layer error types.

/// Errors raised while decoding values that arrived from the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteropError {
    /// A raw discriminant did not match any variant of the target enum.
    #[error("unknown {kind} discriminant: {value}")]
    UnknownDiscriminant {
        /// Name of the enum being decoded.
        kind: &'static str,
        /// The raw value received.
        value: u32,
    },
}
