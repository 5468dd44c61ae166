use num_traits::{Num, ToPrimitive};

use super::{Filter, Seed};
use crate::config::{self, ConfigError};

/// Exponential Moving Average filter over floating-point samples
///
/// `output = alpha * input + (1 - alpha) * output`, with the first sample
/// seeding the output. Higher alpha means less smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ema<F = f64> {
    output: F,
    alpha: F,
    seed: Seed,
}

impl<F> Ema<F>
where
    F: Num + Copy + PartialOrd,
{
    /// Create new EMA filter with uninitialized state
    ///
    /// alpha must be in (0, 1]; only debug builds check it.
    pub fn new(alpha: F) -> Self {
        debug_assert!(
            alpha > F::zero() && alpha <= F::one(),
            "EMA alpha must be in range (0.0, 1.0]"
        );

        Self {
            output: F::zero(),
            alpha,
            seed: Seed::Unseeded,
        }
    }

    /// Create a filter whose output starts at `initial` instead of the first sample
    pub fn with_initial(alpha: F, initial: F) -> Self {
        Self {
            output: initial,
            seed: Seed::Seeded,
            ..Self::new(alpha)
        }
    }

    /// Like [`Ema::new`], but rejects alpha outside (0, 1] in every build
    pub fn try_new(alpha: F) -> Result<Self, ConfigError>
    where
        F: ToPrimitive,
    {
        let checked = alpha.to_f64().ok_or(ConfigError::AlphaOutOfRange)?;
        config::validate_alpha(checked)?;
        Ok(Self::new(alpha))
    }

    /// Apply EMA filter
    ///
    /// First call after construction or reset returns the input unchanged.
    pub fn update(&mut self, input: F) -> F {
        match self.seed {
            Seed::Seeded => {
                self.output = self.alpha * (input - self.output) + self.output;
            }
            Seed::Unseeded => {
                self.output = input;
                self.seed = Seed::Seeded;
            }
        }
        self.output
    }

    /// Unseed the filter; the last output is kept until the next sample
    pub fn reset(&mut self) {
        self.seed = Seed::Unseeded;
    }

    pub fn output(&self) -> F {
        self.output
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_seeded()
    }
}

impl<F> Filter for Ema<F>
where
    F: Num + Copy + PartialOrd,
{
    type Input = F;
    type Output = F;

    fn update(&mut self, input: F) -> F {
        Ema::update(self, input)
    }

    fn reset(&mut self) {
        Ema::reset(self)
    }
}
