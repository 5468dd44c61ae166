//! Demonstrates the moving-average filters on noisy ADC readings
//!
//! Each filter is fed the same samples so their smoothing and lag can be
//! compared side by side.

use moving_average::{Ema, EmaScaled, EmaShift, Filter, Sma, SmaTyped};

const NOISY_SAMPLES: [u16; 12] = [2048, 2100, 2000, 2080, 1990, 2050, 2020, 2060, 3000, 3040, 2980, 3010];

fn print_run<F>(title: &str, filter: &mut F)
where
    F: Filter<Input = u16, Output = u16>,
{
    println!("{title}");
    println!("   Input → Output");
    for &sample in &NOISY_SAMPLES {
        let output = filter.update(sample);
        println!("   {:4} → {:4}", sample, output);
    }
    println!();
}

fn main() {
    println!("=== moving-average Filtering Examples ===\n");

    // Example 1: Floating-point EMA
    println!("1. EMA (alpha=0.3, f64)");
    let mut ema = Ema::new(0.3);
    println!("   Input → Output");
    for &sample in &NOISY_SAMPLES {
        let output = ema.update(f64::from(sample));
        println!("   {:4} → {:7.1}", sample, output);
    }
    println!();

    // Example 2: Fixed-point EMA, alpha = 3/10
    let mut ema_scaled = EmaScaled::<u32>::new(3, 10).expect("Valid config");
    println!("2. Scaled EMA (alpha=3/10, u32)");
    println!("   Input → Output");
    for &sample in &NOISY_SAMPLES {
        let output = ema_scaled.update(u32::from(sample));
        println!("   {:4} → {:4}", sample, output);
    }
    println!();

    // Example 3: Shift EMA, alpha = 1/4, sized for 12-bit readings
    type AdcEma = EmaShift<2, u16, u16>;
    const _: () = assert!(AdcEma::supports_range(0, 4095));
    print_run("3. Shift EMA (alpha=1/4, u16 state)", &mut AdcEma::new(2048));

    // Example 4: Moving averages
    print_run("4. SMA (window=4, u32 accumulator)", &mut SmaTyped::<u16, u32, 4>::new());

    let mut sma = Sma::<f32, 4>::new();
    println!("5. SMA (window=4, f32)");
    println!("   Input → Output");
    for &sample in &NOISY_SAMPLES {
        let output = sma.update(f32::from(sample));
        println!("   {:4} → {:6.1}", sample, output);
    }
}
