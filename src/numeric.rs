//! Numeric traits shared by the integer filters.
//!
//! Implemented for the primitive integer types up to 64 bits. Range bounds are
//! exposed as `i128` associated consts so they can be combined in `const fn`.

use num_traits::float::FloatCore;
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingSub};

/// Integer sample type accepted by [`EmaShift`](crate::filters::EmaShift).
pub trait ShiftInput: PrimInt + 'static {
    const SIGNED: bool;
    const BITS: u32;
    const MIN_WIDE: i128;
    const MAX_WIDE: i128;
}

/// Unsigned accumulator type for [`EmaShift`](crate::filters::EmaShift).
///
/// All arithmetic on the state word is modular, signed inputs are re-centred
/// around half the state range.
pub trait StateWord: PrimInt + Unsigned + WrappingAdd + WrappingSub + 'static {
    const BITS: u32;
    const MAX_WIDE: i128;
}

/// Division of a window sum by its length, rounded to nearest.
///
/// Integers give the result of `(sum + n / 2) / n` without forming the
/// intermediate sum, so sums up to the type's maximum are safe. Floats divide exactly and round half away from zero.
pub trait RoundingDiv: Copy {
    fn div_round(self, n: usize) -> Self;
}

macro_rules! impl_shift_input {
    ($($t:ty => $signed:expr),* $(,)?) => {
        $(
            impl ShiftInput for $t {
                const SIGNED: bool = $signed;
                const BITS: u32 = <$t>::BITS;
                const MIN_WIDE: i128 = <$t>::MIN as i128;
                const MAX_WIDE: i128 = <$t>::MAX as i128;
            }
        )*
    };
}

macro_rules! impl_state_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl StateWord for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX_WIDE: i128 = <$t>::MAX as i128;
            }
        )*
    };
}

// Splitting into quotient and remainder keeps `sum + n / 2` from overflowing
// when the sum sits near the top of its type.
macro_rules! impl_rounding_div_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl RoundingDiv for $t {
                #[inline]
                fn div_round(self, n: usize) -> Self {
                    let divisor = n as $t;
                    let half = (n / 2) as $t;
                    let rounding = if self % divisor >= divisor - half { 1 } else { 0 };
                    self / divisor + rounding
                }
            }
        )*
    };
}

// Negative sums keep the truncating `(sum + n / 2) / n`, which cannot overflow
// below zero.
macro_rules! impl_rounding_div_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl RoundingDiv for $t {
                #[inline]
                fn div_round(self, n: usize) -> Self {
                    let divisor = n as $t;
                    let half = (n / 2) as $t;
                    if self < 0 {
                        return (self + half) / divisor;
                    }
                    let rounding = if self % divisor >= divisor - half { 1 } else { 0 };
                    self / divisor + rounding
                }
            }
        )*
    };
}

impl_shift_input!(
    u8 => false, u16 => false, u32 => false, u64 => false,
    i8 => true, i16 => true, i32 => true, i64 => true,
);

impl_state_word!(u8, u16, u32, u64);

impl_rounding_div_unsigned!(u8, u16, u32, u64, usize);
impl_rounding_div_signed!(i8, i16, i32, i64, isize);

impl RoundingDiv for f32 {
    #[inline]
    fn div_round(self, n: usize) -> Self {
        FloatCore::round(self / n as f32)
    }
}

impl RoundingDiv for f64 {
    #[inline]
    fn div_round(self, n: usize) -> Self {
        FloatCore::round(self / n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_bounds() {
        assert_eq!(<i16 as ShiftInput>::MIN_WIDE, -32768);
        assert_eq!(<i16 as ShiftInput>::MAX_WIDE, 32767);
        assert_eq!(<u8 as ShiftInput>::MIN_WIDE, 0);
        assert!(!<u32 as ShiftInput>::SIGNED);
        assert_eq!(<u64 as StateWord>::MAX_WIDE, u64::MAX as i128);
    }

    #[test]
    fn integer_division_rounds_to_nearest() {
        assert_eq!(55_u32.div_round(10), 6);
        assert_eq!(54_u32.div_round(10), 5);
        assert_eq!(7_u8.div_round(1), 7);
        assert_eq!(4_u8.div_round(3), 1);
        assert_eq!(5_u8.div_round(3), 2);
    }

    #[test]
    fn integer_division_at_type_maximum() {
        assert_eq!(u16::MAX.div_round(2), 32768);
        assert_eq!(u8::MAX.div_round(2), 128);
        assert_eq!(u32::MAX.div_round(10), 429_496_730);
        assert_eq!(i16::MAX.div_round(2), 16384);
        assert_eq!(i8::MAX.div_round(4), 32);
    }

    #[test]
    fn negative_sums_truncate_after_offset() {
        // (-3 + 1) / 2
        assert_eq!((-3_i32).div_round(2), -1);
        // (-10 + 2) / 4
        assert_eq!((-10_i16).div_round(4), -2);
        assert_eq!(i8::MIN.div_round(2), -63);
    }

    #[test]
    fn float_division_rounds_half_away_from_zero() {
        assert_eq!(10.0_f64.div_round(4), 3.0);
        assert_eq!((-10.0_f32).div_round(4), -3.0);
        assert_eq!(9.0_f32.div_round(4), 2.0);
    }
}
