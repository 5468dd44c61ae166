use num_traits::{NumCast, Zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Smoothing factor outside (0, 1], or outside [0, scale] for scaled filters.
    AlphaOutOfRange,
    /// Fixed-point scale of zero.
    ZeroScale,
    /// Fixed-point scale does not fit in the filter's value type.
    ScaleNotRepresentable,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::AlphaOutOfRange => write!(f, "alpha must be in range (0, 1] (or [0, scale] when scaled)"),
            ConfigError::ZeroScale => write!(f, "alpha_scale must be greater than zero"),
            ConfigError::ScaleNotRepresentable => write!(f, "alpha_scale does not fit in the filter value type"),
        }
    }
}

/// Validate a floating-point smoothing factor.
pub fn validate_alpha(alpha: f64) -> Result<(), ConfigError> {
    // Written so that NaN is rejected too
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(ConfigError::AlphaOutOfRange);
    }
    Ok(())
}

/// Validate a fixed-point smoothing factor and convert its scale into `T`.
///
/// Returns the scale and half the scale (halved in unsigned arithmetic before
/// conversion, so the rounding offset is an integer even for float `T`).
pub fn validate_scaled_alpha<T>(alpha: T, alpha_scale: u32) -> Result<(T, T), ConfigError>
where
    T: Copy + PartialOrd + Zero + NumCast,
{
    if alpha_scale == 0 {
        return Err(ConfigError::ZeroScale);
    }

    let scale = T::from(alpha_scale).ok_or(ConfigError::ScaleNotRepresentable)?;
    let half_scale = T::from(alpha_scale / 2).ok_or(ConfigError::ScaleNotRepresentable)?;

    if alpha < T::zero() || alpha > scale {
        return Err(ConfigError::AlphaOutOfRange);
    }

    Ok((scale, half_scale))
}
