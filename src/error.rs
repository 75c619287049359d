/// Errors reported by the checked matrix constructors.
///
/// The primary operations never fail: degenerate inputs produce
/// mathematically degenerate but finite-or-NaN results that propagate
/// silently, matching what callers of the unchecked API rely on. The
/// `try_*` variants reject those inputs up front instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// Two opposing frustum planes coincide, so the projection would
    /// divide by zero.
    #[error("degenerate frustum bounds: {0} planes coincide")]
    DegenerateFrustum(&'static str),

    /// The rotation axis has zero length and defines no direction.
    #[error("rotation axis has zero length")]
    ZeroRotationAxis,
}
