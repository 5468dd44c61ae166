use heapless::Vec;
use num_traits::{AsPrimitive, Num, NumAssignOps, PrimInt, Unsigned, Zero};

use super::Filter;
use crate::numeric::RoundingDiv;

/// Simple moving average filter over the last `N` samples
///
/// Keeps a circular buffer of past samples and a running sum in `T`. The
/// buffer starts zero-filled and the average always divides by `N`, so the
/// first `N - 1` outputs are pulled towards zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sma<T, const N: usize> {
    buffer: [T; N],
    index: usize,
    sum: T,
}

impl<T, const N: usize> Sma<T, N>
where
    T: Num + NumAssignOps + RoundingDiv,
{
    const WINDOW_CHECK: () = assert!(N > 0, "moving average window must hold at least one sample");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WINDOW_CHECK;

        Self {
            buffer: [T::zero(); N],
            index: 0,
            sum: T::zero(),
        }
    }

    /// Apply moving average filter
    ///
    /// Replaces the oldest sample and returns the rounded window mean.
    pub fn update(&mut self, input: T) -> T {
        self.sum -= self.buffer[self.index];
        self.sum += input;
        self.buffer[self.index] = input;
        self.index = (self.index + 1) % N;

        self.average()
    }

    /// Rounded window mean, as returned by the last update
    pub fn average(&self) -> T {
        self.sum.div_round(N)
    }

    pub fn sum(&self) -> T {
        self.sum
    }

    /// Window contents, oldest sample first
    pub fn window(&self) -> Vec<T, N> {
        chronological(&self.buffer, self.index)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.buffer = [T::zero(); N];
        self.index = 0;
        self.sum = T::zero();
    }
}

impl<T, const N: usize> Default for Sma<T, N>
where
    T: Num + NumAssignOps + RoundingDiv,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Filter for Sma<T, N>
where
    T: Num + NumAssignOps + RoundingDiv,
{
    type Input = T;
    type Output = T;

    fn update(&mut self, input: T) -> T {
        Sma::update(self, input)
    }

    fn reset(&mut self) {
        Sma::reset(self)
    }
}

/// Simple moving average with a separate accumulator type
///
/// Samples of type `I` are summed in the unsigned accumulator `A`, so the
/// sum of `N` samples can be wider than a single sample, e.g. `u16` ADC
/// readings summed in a `u32`. Signed accumulators are rejected by the
/// `Unsigned` bound because the rounding offset assumes a non-negative sum.
/// Samples must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmaTyped<I, A, const N: usize> {
    buffer: [I; N],
    index: usize,
    sum: A,
}

impl<I, A, const N: usize> SmaTyped<I, A, N>
where
    I: Zero + AsPrimitive<A>,
    A: PrimInt + Unsigned + RoundingDiv + AsPrimitive<I>,
{
    const WINDOW_CHECK: () = assert!(N > 0, "moving average window must hold at least one sample");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WINDOW_CHECK;

        Self {
            buffer: [I::zero(); N],
            index: 0,
            sum: A::zero(),
        }
    }

    pub fn update(&mut self, input: I) -> I {
        let oldest: A = self.buffer[self.index].as_();
        let newest: A = input.as_();
        self.sum = self.sum - oldest + newest;
        self.buffer[self.index] = input;
        self.index = (self.index + 1) % N;

        self.average()
    }

    pub fn average(&self) -> I {
        self.sum.div_round(N).as_()
    }

    pub fn sum(&self) -> A {
        self.sum
    }

    /// Window contents, oldest sample first
    pub fn window(&self) -> Vec<I, N> {
        chronological(&self.buffer, self.index)
    }

    pub fn reset(&mut self) {
        self.buffer = [I::zero(); N];
        self.index = 0;
        self.sum = A::zero();
    }
}

impl<I, A, const N: usize> Default for SmaTyped<I, A, N>
where
    I: Zero + AsPrimitive<A>,
    A: PrimInt + Unsigned + RoundingDiv + AsPrimitive<I>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, A, const N: usize> Filter for SmaTyped<I, A, N>
where
    I: Zero + AsPrimitive<A>,
    A: PrimInt + Unsigned + RoundingDiv + AsPrimitive<I>,
{
    type Input = I;
    type Output = I;

    fn update(&mut self, input: I) -> I {
        SmaTyped::update(self, input)
    }

    fn reset(&mut self) {
        SmaTyped::reset(self)
    }
}

/// `index` is the next write position, which holds the oldest sample.
fn chronological<T: Copy, const N: usize>(buffer: &[T; N], index: usize) -> Vec<T, N> {
    let (newer, older) = buffer.split_at(index);
    older.iter().chain(newer).copied().collect()
}
