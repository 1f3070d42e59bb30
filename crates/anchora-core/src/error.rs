use crate::transform::Referencial;

/// Errors surfaced by the geometry core.
///
/// All of these are caller mistakes. Nothing in the core retries or recovers
/// on its own.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),

    #[error("unknown referencial `{0}`")]
    UnknownReferencial(String),

    /// The operation needs an opposite anchor to pin, which `Center` lacks.
    #[error("{operation} cannot be anchored on {referencial}")]
    UnanchoredReferencial {
        referencial: Referencial,
        operation: &'static str,
    },

    #[error("invalid scale context: {0}")]
    InvalidScaleContext(String),
}
