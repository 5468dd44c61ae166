//! Division-free exponential moving average.
//!
//! `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]` with `alpha = 2^-K`, so the
//! multiply and divide of the classic form collapse into shifts. The pole sits
//! at `1 - 2^-K`: a larger `K` filters more.
//!
//! The state is a fixed-point number with `K` fractional bits, so it needs at
//! least `M + K` bits, where `M` is the number of bits the inputs actually use:
//!
//! - A 10-bit ADC reading (0..=1023) in a `u16` state allows `K <= 6`; a `u32`
//!   state allows `K <= 22`.
//! - A full-range `i16` input with `K = 1` needs 17 bits, so `u32`.
//!
//! Check a design at compile time with [`EmaShift::supports_range`]:
//!
//! ```
//! use moving_average::filters::EmaShift;
//!
//! type AdcFilter = EmaShift<6, u16, u16>;
//! const _: () = assert!(AdcFilter::supports_range(0, 1023));
//!
//! let mut filter = AdcFilter::new(512);
//! assert_eq!(filter.update(512), 512);
//! ```

use num_traits::AsPrimitive;

use super::{Filter, Seed};
use crate::numeric::{ShiftInput, StateWord};

/// Exponential moving average with smoothing factor `2^-K`.
///
/// `I` is the sample type (signed or unsigned), `S` the unsigned state word.
/// Signed samples are offset by half the state range so that all state
/// arithmetic stays unsigned and modular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaShift<const K: u32, I = u16, S = u32> {
    state: S,
    output: I,
    seed: Seed,
}

impl<const K: u32, I, S> EmaShift<K, I, S>
where
    I: ShiftInput + AsPrimitive<S>,
    S: StateWord + AsPrimitive<I>,
{
    const WIDTH_CHECK: () = {
        assert!(S::BITS >= I::BITS, "state type cannot be narrower than input type");
        assert!(K < S::BITS, "shift count must be smaller than the state width");
    };

    /// Largest input that cannot overflow the state.
    pub const MAX_INPUT: i128 = {
        let bound = if I::SIGNED { S::MAX_WIDE >> (K + 1) } else { S::MAX_WIDE >> K };
        if bound < I::MAX_WIDE { bound } else { I::MAX_WIDE }
    };

    /// Smallest input that cannot overflow the state.
    pub const MIN_INPUT: i128 = {
        let bound = if I::SIGNED { -(S::MAX_WIDE >> (K + 1)) - 1 } else { 0 };
        if bound > I::MIN_WIDE { bound } else { I::MIN_WIDE }
    };

    /// Create a filter whose first output equals `initial`.
    pub fn new(initial: I) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;

        Self {
            state: Self::seeded_state(initial),
            output: initial,
            seed: Seed::Seeded,
        }
    }

    /// Whether every input in `min..=max` can be filtered without overflowing
    /// the state.
    pub const fn supports_range(min: i128, max: i128) -> bool {
        min <= max && min >= Self::MIN_INPUT && max <= Self::MAX_INPUT
    }

    /// Feed a sample and return the filtered output.
    pub fn update(&mut self, input: I) -> I {
        if let Seed::Unseeded = self.seed {
            self.state = Self::seeded_state(input);
            self.seed = Seed::Seeded;
        }

        let sample: S = input.as_();
        self.state = self.state.wrapping_add(&sample);

        let output = (self.state.wrapping_add(&Self::half()) >> Self::shift())
            .wrapping_sub(&(Self::offset() >> Self::shift()));

        // Keep only the fractional remainder for the next round
        self.state = self.state.wrapping_sub(&output);

        self.output = output.as_();
        self.output
    }

    /// Unseed the filter so the next sample is passed through unchanged.
    pub fn reset(&mut self) {
        self.seed = Seed::Unseeded;
    }

    /// Last value returned by [`update`](Self::update), or the initial value.
    pub fn output(&self) -> I {
        self.output
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_seeded()
    }

    /// Accumulator such that the next `update(initial)` returns `initial`.
    fn seeded_state(initial: I) -> S {
        let initial: S = initial.as_();
        Self::offset()
            .wrapping_add(&(initial << Self::shift()))
            .wrapping_sub(&initial)
    }

    #[inline]
    fn shift() -> usize {
        K as usize
    }

    /// Re-centring offset: half the state range for signed inputs, else zero.
    #[inline]
    fn offset() -> S {
        if I::SIGNED {
            (S::max_value() >> 1) + S::one()
        } else {
            S::zero()
        }
    }

    /// Rounding term, one half in `K`-fractional-bit fixed point.
    #[inline]
    fn half() -> S {
        if K > 0 {
            S::one() << (Self::shift() - 1)
        } else {
            S::zero()
        }
    }
}

impl<const K: u32, I, S> Default for EmaShift<K, I, S>
where
    I: ShiftInput + AsPrimitive<S>,
    S: StateWord + AsPrimitive<I>,
{
    fn default() -> Self {
        Self::new(I::zero())
    }
}

impl<const K: u32, I, S> Filter for EmaShift<K, I, S>
where
    I: ShiftInput + AsPrimitive<S>,
    S: StateWord + AsPrimitive<I>,
{
    type Input = I;
    type Output = I;

    fn update(&mut self, input: I) -> I {
        EmaShift::update(self, input)
    }

    fn reset(&mut self) {
        EmaShift::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_passes_through() {
        let mut filter = EmaShift::<4, u16, u32>::new(1000);
        assert_eq!(filter.output(), 1000);
        assert_eq!(filter.update(1000), 1000);
    }

    #[test]
    fn step_response_halves_the_gap() {
        let mut filter = EmaShift::<1, u16, u32>::default();

        assert_eq!(filter.update(100), 50);
        assert_eq!(filter.update(100), 75);
        assert_eq!(filter.update(100), 88);
        assert_eq!(filter.update(100), 94);
    }

    #[test]
    fn rounds_half_up() {
        let mut filter = EmaShift::<2, u8, u16>::new(0);
        // 2 / 4 = 0.5
        assert_eq!(filter.update(2), 1);
    }

    #[test]
    fn zero_shift_is_passthrough() {
        let mut filter = EmaShift::<0, u16, u16>::new(0);
        for x in [5, 900, 3, 65535, 0] {
            assert_eq!(filter.update(x), x);
        }
    }

    #[test]
    fn signed_input_below_zero() {
        let mut filter = EmaShift::<2, i16, u32>::new(0);

        // -100 / 4 = -25
        assert_eq!(filter.update(-100), -25);
        // -25 + (-100 + 25) / 4 = -43.75
        assert_eq!(filter.update(-100), -44);
    }

    #[test]
    fn reset_reseeds_from_next_sample() {
        let mut filter = EmaShift::<3, i32, u64>::new(-7000);
        filter.update(12_000);
        filter.update(-3);

        filter.reset();
        assert!(!filter.is_seeded());
        assert_eq!(filter.update(424), 424);
        assert_eq!(filter.update(424), 424);
    }

    #[test]
    fn range_bounds() {
        type Adc12 = EmaShift<4, u16, u16>;
        assert!(Adc12::supports_range(0, 4095));
        assert!(!Adc12::supports_range(0, 4096));
        assert!(!Adc12::supports_range(-1, 100));
        assert!(!Adc12::supports_range(10, 5));

        type Signed16 = EmaShift<1, i16, u16>;
        assert!(Signed16::supports_range(-16384, 16383));
        assert!(!Signed16::supports_range(-16385, 0));
        assert!(!Signed16::supports_range(0, 16384));
    }
}
