use moving_average::{validate_alpha, validate_scaled_alpha, ConfigError};

#[test]
fn test_alpha_must_be_positive() {
    assert_eq!(validate_alpha(0.0), Err(ConfigError::AlphaOutOfRange));
    assert_eq!(validate_alpha(-0.5), Err(ConfigError::AlphaOutOfRange));
}

#[test]
fn test_alpha_of_one_is_valid() {
    assert_eq!(validate_alpha(1.0), Ok(()));
    assert_eq!(validate_alpha(f64::MIN_POSITIVE), Ok(()));
}

#[test]
fn test_scaled_alpha_zero_weight_is_valid() {
    assert_eq!(validate_scaled_alpha(0_u32, 16), Ok((16, 8)));
}

#[test]
fn test_scale_must_fit_value_type() {
    assert_eq!(validate_scaled_alpha(1_i8, 200), Err(ConfigError::ScaleNotRepresentable));
    assert_eq!(validate_scaled_alpha(1_i16, 200), Ok((200, 100)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::ZeroScale.to_string(),
        "alpha_scale must be greater than zero"
    );
    assert!(ConfigError::AlphaOutOfRange.to_string().contains("(0, 1]"));
}

#[cfg(feature = "ema")]
#[test]
fn test_checked_float_constructor() {
    use moving_average::Ema;

    assert!(Ema::try_new(0.25).is_ok());
    assert_eq!(Ema::try_new(2.0), Err(ConfigError::AlphaOutOfRange));
    assert_eq!(Ema::try_new(f64::NAN).map(|f| f.alpha()), Err(ConfigError::AlphaOutOfRange));
}

#[cfg(feature = "ema-scaled")]
#[test]
fn test_scaled_constructor_reports_errors() {
    use moving_average::EmaScaled;

    assert!(matches!(EmaScaled::<u16>::new(5, 0), Err(ConfigError::ZeroScale)));
    assert!(matches!(EmaScaled::<u16>::new(5, 4), Err(ConfigError::AlphaOutOfRange)));
    assert!(matches!(EmaScaled::<u16>::with_initial(5, 70_000, 1), Err(ConfigError::ScaleNotRepresentable)));
}
