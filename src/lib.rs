#![no_std]

mod config;
pub mod filters;
pub mod numeric;

pub use config::{validate_alpha, validate_scaled_alpha, ConfigError};
pub use filters::{Filter, Seed};
pub use numeric::{RoundingDiv, ShiftInput, StateWord};

#[cfg(feature = "ema")]
pub use filters::Ema;

#[cfg(feature = "ema-scaled")]
pub use filters::EmaScaled;

#[cfg(feature = "ema-shift")]
pub use filters::EmaShift;

#[cfg(feature = "sma")]
pub use filters::{Sma, SmaTyped};
