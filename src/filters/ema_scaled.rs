//! Fixed-point exponential moving average.
//!
//! The smoothing factor is `alpha / alpha_scale`, so a factor of 0.03 over
//! `i32` samples is `EmaScaled::<i32>::new(3, 100)`. The filter keeps the
//! output multiplied by `alpha_scale` between updates and only rounds the
//! value it reports, so rounding error does not compound.

use num_traits::{Num, NumCast};

use super::{Filter, Seed};
use crate::config::{self, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaScaled<T> {
    alpha: T,
    alpha_scale: u32,
    scale: T,
    half_scale: T,
    output_scaled: T,
    seed: Seed,
}

impl<T> EmaScaled<T>
where
    T: Num + NumCast + Copy + PartialOrd,
{
    /// Create an unseeded filter; the first sample becomes the output.
    ///
    /// Fails if `alpha_scale` is zero or does not fit in `T`, or if `alpha`
    /// lies outside `[0, alpha_scale]`.
    pub fn new(alpha: T, alpha_scale: u32) -> Result<Self, ConfigError> {
        let (scale, half_scale) = config::validate_scaled_alpha(alpha, alpha_scale)?;

        Ok(Self {
            alpha,
            alpha_scale,
            scale,
            half_scale,
            output_scaled: T::zero(),
            seed: Seed::Unseeded,
        })
    }

    /// Create a seeded filter whose output starts at `initial`.
    pub fn with_initial(alpha: T, alpha_scale: u32, initial: T) -> Result<Self, ConfigError> {
        let mut filter = Self::new(alpha, alpha_scale)?;
        filter.output_scaled = initial * filter.scale;
        filter.seed = Seed::Seeded;
        Ok(filter)
    }

    /// Feed a sample and return the rounded output.
    pub fn update(&mut self, input: T) -> T {
        match self.seed {
            Seed::Seeded => {
                self.output_scaled = self.alpha * input
                    + (self.scale - self.alpha) * self.output_scaled / self.scale;
            }
            Seed::Unseeded => {
                self.output_scaled = input * self.scale;
                self.seed = Seed::Seeded;
            }
        }
        self.output()
    }

    /// Current output, rounded to nearest for non-negative integer state.
    ///
    /// Does not modify the filter.
    pub fn output(&self) -> T {
        (self.output_scaled + self.half_scale) / self.scale
    }

    pub fn reset(&mut self) {
        self.seed = Seed::Unseeded;
    }

    /// Unrounded accumulator, `output * alpha_scale`.
    pub fn output_scaled(&self) -> T {
        self.output_scaled
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn alpha_scale(&self) -> u32 {
        self.alpha_scale
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_seeded()
    }
}

impl<T> Filter for EmaScaled<T>
where
    T: Num + NumCast + Copy + PartialOrd,
{
    type Input = T;
    type Output = T;

    fn update(&mut self, input: T) -> T {
        EmaScaled::update(self, input)
    }

    fn reset(&mut self) {
        EmaScaled::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_returns_input() {
        let mut filter = EmaScaled::<i32>::new(3, 100).expect("Valid config");
        assert_eq!(filter.update(812), 812);
        assert_eq!(filter.output_scaled(), 81_200);
    }

    #[test]
    fn keeps_unrounded_accumulator() {
        let mut filter = EmaScaled::<u32>::new(1, 2).expect("Valid config");

        assert_eq!(filter.update(4), 4);
        assert_eq!(filter.output_scaled(), 8);

        // 1 * 10 + (2 - 1) * 8 / 2
        assert_eq!(filter.update(10), 7);
        assert_eq!(filter.output_scaled(), 14);
    }

    #[test]
    fn step_response() {
        let mut filter = EmaScaled::<i32>::with_initial(3, 100, 0).expect("Valid config");

        // 3 * 1000 + 97 * 0 / 100 = 3000
        assert_eq!(filter.update(1000), 30);
        // 3 * 1000 + 97 * 3000 / 100 = 5910
        assert_eq!(filter.update(1000), 59);
    }

    #[test]
    fn output_rounds_to_nearest() {
        let mut filter = EmaScaled::<u32>::with_initial(1, 4, 0).expect("Valid config");
        filter.update(2); // 1 * 2 + 3 * 0 / 4 = 2 -> (2 + 2) / 4 = 1
        assert_eq!(filter.output_scaled(), 2);
        assert_eq!(filter.output(), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(EmaScaled::<i32>::new(3, 0), Err(ConfigError::ZeroScale));
        assert_eq!(EmaScaled::<i32>::new(200, 100), Err(ConfigError::AlphaOutOfRange));
        assert_eq!(EmaScaled::<u8>::new(1, 300), Err(ConfigError::ScaleNotRepresentable));
    }
}
