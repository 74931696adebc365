// src/error.rs
use std::fmt;

/// Error types for surface pricing and grid evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A single scalar input lies outside its domain
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A min/max pair is not strictly increasing, or the resolution is too small
    InvalidRange { field: String, reason: String },

    /// Pricing produced a non-finite value from validated inputs
    NumericalInstability { method: String, reason: String },

    /// Configuration could not be loaded
    InvalidConfiguration { field: String, reason: String },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SurfaceError::InvalidRange { field, reason } => {
                write!(f, "Invalid range for '{}': {}", field, reason)
            }
            SurfaceError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
            SurfaceError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Result type alias for bsm-surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Validation utilities
pub mod validation {
    use super::{SurfaceError, SurfaceResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> SurfaceResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(SurfaceError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Like [`validate_positive`], but records which operation the value would break
    pub fn validate_domain(name: &str, value: f64, undefined: &str) -> SurfaceResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(SurfaceError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: format!("must be positive (> 0), otherwise {} is undefined", undefined),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SurfaceResult<()> {
        if !value.is_finite() {
            Err(SurfaceError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that `[min, max]` is a finite, strictly increasing interval
    pub fn validate_increasing(field: &str, min: f64, max: f64) -> SurfaceResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SurfaceError::InvalidRange {
                field: field.to_string(),
                reason: format!("bounds [{}, {}] must be finite", min, max),
            });
        }
        if min >= max {
            Err(SurfaceError::InvalidRange {
                field: field.to_string(),
                reason: format!("min ({}) must be strictly less than max ({})", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of samples per grid axis; returns the cell count
    pub fn validate_resolution(resolution: usize) -> SurfaceResult<usize> {
        if resolution < 2 {
            return Err(SurfaceError::InvalidRange {
                field: "resolution".to_string(),
                reason: format!("must be at least 2 (got {})", resolution),
            });
        }
        resolution
            .checked_mul(resolution)
            .ok_or_else(|| SurfaceError::InvalidRange {
                field: "resolution".to_string(),
                reason: format!("{} x {} cells overflows usize", resolution, resolution),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", -1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_increasing() {
        assert!(validate_increasing("spot", 50.0, 150.0).is_ok());
        assert!(validate_increasing("spot", 100.0, 100.0).is_err());
        assert!(validate_increasing("spot", 150.0, 50.0).is_err());
        assert!(validate_increasing("spot", 50.0, f64::INFINITY).is_err());

        match validate_increasing("strike", 10.0, 10.0) {
            Err(SurfaceError::InvalidRange { field, .. }) => assert_eq!(field, "strike"),
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_resolution() {
        assert_eq!(validate_resolution(2), Ok(4));
        assert_eq!(validate_resolution(50), Ok(2500));
        assert!(validate_resolution(usize::MAX / 2).is_err());
        assert!(validate_resolution(1).is_err());
        assert!(validate_resolution(0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = SurfaceError::InvalidParameter {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));

        let error = SurfaceError::InvalidRange {
            field: "spot".to_string(),
            reason: "min (100) must be strictly less than max (100)".to_string(),
        };
        assert!(format!("{}", error).starts_with("Invalid range for 'spot'"));
    }
}
