/// Smoothing filter implementations
///
/// Every filter is a plain value with constant-size state. Enable only the
/// kinds you need through cargo features.
#[cfg(feature = "ema")]
mod ema;

#[cfg(feature = "ema-scaled")]
mod ema_scaled;

#[cfg(feature = "ema-shift")]
mod ema_shift;

#[cfg(feature = "sma")]
mod moving_avg;

#[cfg(feature = "ema")]
pub use ema::Ema;

#[cfg(feature = "ema-scaled")]
pub use ema_scaled::EmaScaled;

#[cfg(feature = "ema-shift")]
pub use ema_shift::EmaShift;

#[cfg(feature = "sma")]
pub use moving_avg::{Sma, SmaTyped};

/// Common interface: feed one sample, get one smoothed value.
pub trait Filter {
    type Input;
    type Output;

    /// Feed a sample and return the new filter output.
    fn update(&mut self, input: Self::Input) -> Self::Output;

    /// Restart the filter without changing its configuration.
    ///
    /// EMA filters become unseeded, so the next sample is returned verbatim.
    /// Moving averages clear their window.
    fn reset(&mut self);
}

/// Seeding state of an exponential filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Seed {
    /// No sample yet; the next input becomes the output verbatim.
    #[default]
    Unseeded,
    /// Output follows the difference equation.
    Seeded,
}

impl Seed {
    #[inline]
    pub const fn is_seeded(self) -> bool {
        matches!(self, Seed::Seeded)
    }
}
