// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Directed rounding of the floating point primitives.
//!
//! Each primitive is evaluated in double precision and its result is moved to the previous (`*_lo` functions) or the next (`*_hi` functions) representable double. The lower bound of an interval is always computed with a `*_lo` function and the upper bound with a `*_hi` function, so the result of an interval operation encloses every exact result.
//!
//! Rounding can be switched off with [`disable`] when the enclosure guarantee is not needed. The switch is stored per thread: disabling it in one thread never affects a computation running in another one.
//!
//! # Examples
//!
//! ```rust
//! use interval::rounding;
//!
//! assert!(rounding::add_lo(1.0, 2.0) < 3.0);
//! assert!(rounding::add_hi(1.0, 2.0) > 3.0);
//!
//! let exact = rounding::without_rounding(|| rounding::add_hi(1.0, 2.0));
//! assert_eq!(exact, 3.0);
//! ```

use log::debug;
use std::cell::Cell;

thread_local! {
  static ROUNDING_ENABLED: Cell<bool> = Cell::new(true);
}

/// Next representable double above `v`, infinities and NaN are fixed points.
fn step_up(v: f64) -> f64 {
  if v.is_nan() || v.is_infinite() {
    v
  }
  else if v == 0.0 {
    // Both `0.0` and `-0.0` step to the smallest positive subnormal.
    f64::from_bits(1)
  }
  else if v > 0.0 {
    f64::from_bits(v.to_bits() + 1)
  }
  else {
    f64::from_bits(v.to_bits() - 1)
  }
}

fn step_down(v: f64) -> f64 {
  -step_up(-v)
}

/// Next representable double above `v`, even when rounding is disabled.
///
/// `safe_next(-inf) == -inf` and `safe_next(0.0)` is the smallest positive subnormal.
pub fn safe_next(v: f64) -> f64 {
  step_up(v)
}

/// Previous representable double below `v`, even when rounding is disabled.
pub fn safe_prev(v: f64) -> f64 {
  step_down(v)
}

/// Rounds `v` upward if rounding is enabled, identity otherwise.
pub fn next(v: f64) -> f64 {
  if is_enabled() { step_up(v) } else { v }
}

/// Rounds `v` downward if rounding is enabled, identity otherwise.
pub fn prev(v: f64) -> f64 {
  if is_enabled() { step_down(v) } else { v }
}

/// Restores outward rounding in the current thread (the default).
pub fn enable() {
  debug!("outward rounding enabled");
  ROUNDING_ENABLED.with(|r| r.set(true));
}

/// Turns `next` and `prev` into the identity in the current thread.
///
/// Results computed while rounding is disabled are point approximations and do not necessarily enclose the exact results.
pub fn disable() {
  debug!("outward rounding disabled");
  ROUNDING_ENABLED.with(|r| r.set(false));
}

pub fn is_enabled() -> bool {
  ROUNDING_ENABLED.with(|r| r.get())
}

struct RestoreRounding(bool);

impl Drop for RestoreRounding
{
  fn drop(&mut self) {
    let previous = self.0;
    ROUNDING_ENABLED.with(|r| r.set(previous));
  }
}

/// Runs `f` with rounding disabled and restores the previous mode afterwards, even if `f` panics.
pub fn without_rounding<F, R>(f: F) -> R where
 F: FnOnce() -> R
{
  let _restore = RestoreRounding(is_enabled());
  ROUNDING_ENABLED.with(|r| r.set(false));
  f()
}

pub fn add_lo(x: f64, y: f64) -> f64 { prev(x + y) }
pub fn add_hi(x: f64, y: f64) -> f64 { next(x + y) }

pub fn sub_lo(x: f64, y: f64) -> f64 { prev(x - y) }
pub fn sub_hi(x: f64, y: f64) -> f64 { next(x - y) }

/// A zero factor gives an exact zero.
pub fn mul_lo(x: f64, y: f64) -> f64 {
  if x == 0.0 || y == 0.0 { 0.0 } else { prev(x * y) }
}

pub fn mul_hi(x: f64, y: f64) -> f64 {
  if x == 0.0 || y == 0.0 { 0.0 } else { next(x * y) }
}

/// A zero dividend gives an exact zero when the divisor is non-zero.
pub fn div_lo(x: f64, y: f64) -> f64 {
  if x == 0.0 && y != 0.0 && !y.is_nan() { 0.0 } else { prev(x / y) }
}

pub fn div_hi(x: f64, y: f64) -> f64 {
  if x == 0.0 && y != 0.0 && !y.is_nan() { 0.0 } else { next(x / y) }
}

fn truncate(x: f64) -> f64 {
  if x < 0.0 { x.ceil() } else { x.floor() }
}

/// Integer part (toward zero) of the value just below `x`.
pub fn int_lo(x: f64) -> f64 { truncate(prev(x)) }

/// Integer part (toward zero) of the value just above `x`.
pub fn int_hi(x: f64) -> f64 { truncate(next(x)) }

macro_rules! rounded_unary
{
  ( $( $lo:ident, $hi:ident, $f:ident );* ) =>
  {$(
    #[doc = concat!("`f64::", stringify!($f), "` rounded down.")]
    pub fn $lo(x: f64) -> f64 { prev(x.$f()) }

    #[doc = concat!("`f64::", stringify!($f), "` rounded up.")]
    pub fn $hi(x: f64) -> f64 { next(x.$f()) }
  )*}
}

rounded_unary! {
  exp_lo, exp_hi, exp;
  log_lo, log_hi, ln;
  sqrt_lo, sqrt_hi, sqrt;
  cbrt_lo, cbrt_hi, cbrt;
  sin_lo, sin_hi, sin;
  cos_lo, cos_hi, cos;
  tan_lo, tan_hi, tan;
  asin_lo, asin_hi, asin;
  acos_lo, acos_hi, acos;
  atan_lo, atan_hi, atan;
  sinh_lo, sinh_hi, sinh;
  cosh_lo, cosh_hi, cosh;
  tanh_lo, tanh_hi, tanh
}

// Exponentiation by squaring, every product is rounded with `mul`.
fn pow_by_squaring(mut x: f64, mut power: u32, mul: fn(f64, f64) -> f64) -> f64 {
  let mut y = if power & 1 == 1 { x } else { 1.0 };
  power >>= 1;
  while power > 0 {
    x = mul(x, x);
    if power & 1 == 1 {
      y = mul(x, y);
    }
    power >>= 1;
  }
  y
}

/// `x^power` rounded down, `x` is expected to be non-negative.
pub fn pow_lo(x: f64, power: u32) -> f64 {
  pow_by_squaring(x, power, mul_lo)
}

/// `x^power` rounded up, `x` is expected to be non-negative.
pub fn pow_hi(x: f64, power: u32) -> f64 {
  pow_by_squaring(x, power, mul_hi)
}

/// `x^power` for a real exponent rounded down.
pub fn powf_lo(x: f64, power: f64) -> f64 { prev(x.powf(power)) }

/// `x^power` for a real exponent rounded up.
pub fn powf_hi(x: f64, power: f64) -> f64 { next(x.powf(power)) }

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  const EPS: f64 = 1e-7;

  #[test]
  fn next_prev_infinities() {
    assert_eq!(next(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(prev(f64::INFINITY), f64::INFINITY);
    assert_eq!(next(f64::INFINITY), f64::INFINITY);
    assert_eq!(prev(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(next(f64::NAN).is_nan());
    assert!(prev(f64::NAN).is_nan());
  }

  #[test]
  fn next_prev_zero() {
    let tiny = f64::from_bits(1);
    assert_eq!(next(0.0), tiny);
    assert_eq!(next(-0.0), tiny);
    assert_eq!(prev(0.0), -tiny);
    assert!(next(0.0) > 0.0);
    assert!(prev(0.0) < 0.0);
  }

  #[test]
  fn next_prev_values() {
    assert_eq!(next(1.0), 1.0000000000000002);
    assert_eq!(prev(1.0), 0.9999999999999999);
    assert_eq!(next(3.0), 3.0000000000000004);
    assert_eq!(prev(3.0), 2.9999999999999996);
    assert_eq!(next(f64::MAX), f64::INFINITY);
    assert_eq!(prev(f64::MIN), f64::NEG_INFINITY);
    assert_eq!(next(-1.0), -0.9999999999999999);
    assert_eq!(next(-f64::from_bits(1)), 0.0);
  }

  #[test]
  fn next_prev_round_trip() {
    let values = [1.0, -1.0, 0.1, -0.1, 1e300, -1e300, 1e-310, -1e-310, 12345.678, 1e-320];
    for &v in values.iter() {
      assert!(prev(next(v)) <= v, "prev(next({})) > {}", v, v);
      assert!(v <= next(prev(v)), "next(prev({})) < {}", v, v);
      assert!(prev(v) < v && v < next(v));
    }
  }

  #[test]
  fn arithmetic_rounding() {
    let n = add_lo(1.0, 2.0);
    assert!(n < 3.0);
    assert_abs_diff_eq!(n, 3.0, epsilon = EPS);
    let n = add_hi(1.0, 2.0);
    assert!(n > 3.0);
    assert_abs_diff_eq!(n, 3.0, epsilon = EPS);

    assert!(sub_lo(1.0, 2.0) < -1.0);
    assert!(sub_hi(1.0, 2.0) > -1.0);

    assert!(mul_lo(2.0, 3.0) < 6.0);
    assert!(mul_hi(2.0, 3.0) > 6.0);

    let d = 2.0 / 3.0;
    assert!(div_lo(2.0, 3.0) < d);
    assert!(div_hi(2.0, 3.0) > d);
    assert_abs_diff_eq!(div_hi(2.0, 3.0), d, epsilon = EPS);
  }

  #[test]
  fn exact_zero_products() {
    assert_eq!(mul_lo(0.0, 0.0), 0.0);
    assert_eq!(mul_hi(0.0, 0.0), 0.0);
    assert_eq!(mul_lo(0.0, 5.0), 0.0);
    assert_eq!(mul_hi(-3.0, 0.0), 0.0);
    assert_eq!(div_lo(0.0, 3.0), 0.0);
    assert_eq!(div_hi(0.0, -3.0), 0.0);
    assert!(div_hi(0.0, 0.0).is_nan());
  }

  #[test]
  fn integer_part() {
    assert_eq!(int_lo(3.1), 3.0);
    assert_eq!(int_lo(3.0), 2.0);
    assert_eq!(int_lo(-3.1), -3.0);
    assert_eq!(int_lo(-3.0), -3.0);
    assert_eq!(int_lo(0.0), 0.0);

    assert_eq!(int_hi(3.1), 3.0);
    assert_eq!(int_hi(3.0), 3.0);
    assert_eq!(int_hi(-3.1), -3.0);
    assert_eq!(int_hi(-3.0), -2.0);
    assert_eq!(int_hi(0.0), 0.0);
  }

  #[test]
  fn integer_power() {
    let n = pow_lo(2.0, 2);
    assert!(n < 4.0);
    assert_abs_diff_eq!(n, 4.0, epsilon = EPS);
    let n = pow_hi(2.0, 2);
    assert!(n > 4.0);
    assert!(pow_hi(2.0, 3) > 8.0);
    assert!(pow_lo(2.0, 10) < 1024.0);
    assert_abs_diff_eq!(pow_hi(2.0, 10), 1024.0, epsilon = EPS);
    assert_eq!(pow_lo(7.0, 0), 1.0);
    assert_eq!(pow_hi(1.5, 1), 1.5);
    assert!(pow_hi(10.0, 400).is_infinite());
  }

  #[test]
  fn unary_functions() {
    assert!(exp_lo(1.0) < std::f64::consts::E);
    assert!(exp_hi(1.0) > std::f64::consts::E);
    assert!(log_lo(1.0) < 0.0 && log_hi(1.0) > 0.0);
    assert!(sqrt_lo(4.0) < 2.0 && sqrt_hi(4.0) > 2.0);
    assert!(cos_hi(0.0) > 1.0);
    assert!(powf_lo(8.0, 1.0 / 3.0) < powf_hi(8.0, 1.0 / 3.0));
  }

  #[test]
  fn toggle_rounding() {
    without_rounding(|| {
      assert!(!is_enabled());
      assert_eq!(prev(2.0), 2.0);
      assert_eq!(next(2.0), 2.0);
      assert_eq!(div_lo(1.0, 3.0), 1.0 / 3.0);
      assert!(safe_next(2.0) > 2.0);
      assert!(safe_prev(2.0) < 2.0);
    });
    assert!(is_enabled());
    assert!(prev(2.0) < 2.0 && next(2.0) > 2.0);
  }

  #[test]
  fn enable_disable() {
    disable();
    assert_eq!(next(1.0), 1.0);
    enable();
    assert!(next(1.0) > 1.0);
  }

  #[test]
  fn toggle_restored_after_panic() {
    let result = std::panic::catch_unwind(|| {
      without_rounding(|| panic!("inside"))
    });
    assert!(result.is_err());
    assert!(is_enabled());
  }
}
