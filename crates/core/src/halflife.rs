//! Half-life to turn-scale mapping
//!
//! Physical half-lives in the decay table span 33 orders of magnitude
//! (8Beryllium at 8.19e-17 s, 44Titanium at 60 years). The mapping
//! below compresses that span into playable turn counts: a fitted
//! curve over log10(half-life), switching to a linear extrapolation
//! past a threshold so near-stable nuclides stay tractable.
//!
//! The curve constants were fitted so that 7Beryllium, 8Beryllium,
//! and 56Nickel land on the turn scales the game was balanced around.
//! This is a game-balance knob, not a physical law.

/// Fitted curve coefficients (quadratic in ln(turns)^(1/25))
const A: f64 = 1.40957;
const B: f64 = 21.249;
const C: f64 = 16.0867;

/// log10(seconds) threshold past which the curve is extrapolated
/// linearly; the exponential branch at 9 already exceeds 50000 turns.
const THETA: f64 = 8.0;

/// Derivative of the curve at `THETA`, used as the linear slope
const LINEAR_SLOPE: f64 = 274.448763451;

/// The exponential branch, valid for `l <= THETA`
fn curve(l: f64) -> f64 {
    let discriminant = (B * B + 4.0 * A * (C + l)).max(0.0);
    let root = (-B + discriminant.sqrt()) / (2.0 * A);
    // The inner root goes slightly negative for very short half-lives;
    // the odd integer power keeps the sign.
    root.powi(25).exp()
}

/// Map a half-life in seconds to the turn scale `m`
///
/// The decay countdown for a fresh tile is then drawn uniformly from
/// `[ceil(4m), ceil(8m)]` (see [`crate::decay::roll_countdown`]).
pub fn half_life_to_turns(half_life_secs: f64) -> f64 {
    let l = half_life_secs.log10();
    if l <= THETA {
        curve(l)
    } else {
        curve(THETA) + LINEAR_SLOPE * (l - THETA)
    }
}
