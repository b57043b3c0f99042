/// Invalid geometry passed to one of the checked entry points.
///
/// The unchecked generator never returns these; it produces degenerate
/// (possibly NaN) coordinates instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SliceError {
    #[error("invalid geometry: radius must be finite and greater than zero, got {0}")]
    NonPositiveRadius(f64),

    #[error("invalid geometry: thickness must be within 0.0..={radius}, got {thickness}")]
    InvalidThickness { thickness: f64, radius: f64 },

    #[error("invalid geometry: angles must be finite, got {start_deg}..{end_deg}")]
    NonFiniteAngle { start_deg: f64, end_deg: f64 },

    #[error("invalid geometry: corner radius must be finite and non-negative, got {0}")]
    NegativeCornerRadius(f64),

    #[error("invalid geometry: center must be finite, got ({0}, {1})")]
    NonFiniteCenter(f64, f64),
}
