//! Error types for decoration configuration.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building a decoration.
///
/// All validation happens at build time; once a decoration exists, its
/// measure and draw operations are infallible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// No painter (or painter factory) was configured.
    #[error("A divider painter or painter factory is required")]
    MissingPainter,

    /// A thickness or padding value was NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    NonFiniteDimension { what: &'static str, value: f32 },
}

/// Validate a configured dimension: reject non-finite values, clamp
/// negative input to zero.
pub(crate) fn checked_dimension(what: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteDimension { what, value });
    }
    Ok(value.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_dimension_clamps_negative() {
        assert_eq!(checked_dimension("thickness", -4.0).unwrap(), 0.0);
        assert_eq!(checked_dimension("thickness", 4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_checked_dimension_rejects_non_finite() {
        assert!(checked_dimension("thickness", f32::NAN).is_err());
        assert!(checked_dimension("thickness", f32::INFINITY).is_err());
    }
}
