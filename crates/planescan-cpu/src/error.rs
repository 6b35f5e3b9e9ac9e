use thiserror::Error;

/// Errors reported by the runtime-width entry points.
///
/// The cooperative primitive itself has no error path: its width precondition
/// is enforced at compile time and its participation contract is undefined
/// behavior by design, so only the runtime-width dispatch can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneError {
    /// The input length is not a supported plane dimension.
    #[error("unsupported plane dimension {plane_dim}: expected a power of two up to 64")]
    UnsupportedPlaneDim {
        /// The rejected input length.
        plane_dim: usize,
    },
}
