//! Linear interpolation helpers for gradients and coordinate mapping

use num_traits::Float;

/// Linear interpolation between `start` and `stop`
///
/// `amount` of zero yields `start`, one yields `stop`. Values outside
/// `[0, 1]` extrapolate.
// Unfused: gradient channels must round identically on every platform
#[allow(clippy::suboptimal_flops)]
pub fn lerp<T: Float>(start: T, stop: T, amount: T) -> T {
    amount * (stop - start) + start
}

/// Re-map `value` from the range `[start1, stop1]` onto `[start2, stop2]`
///
/// A degenerate source range maps everything onto `start2`.
pub fn map_range<T: Float>(value: T, start1: T, stop1: T, start2: T, stop2: T) -> T {
    let span = stop1 - start1;
    if span == T::zero() {
        return start2;
    }
    lerp(start2, stop2, (value - start1) / span)
}

/// Interpolate each RGB channel and round to the nearest level
///
/// `amount` is clamped to `[0, 1]` so the result stays between the endpoints.
pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], amount: f64) -> [u8; 3] {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        lerp(f64::from(a), f64::from(b), amount)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}
