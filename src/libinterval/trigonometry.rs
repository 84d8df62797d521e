// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trigonometric and hyperbolic functions.
//!
//! `cos` reduces its argument to `[0, 2π)` with `fmod` and then looks at where the reduced bounds fall with respect to `π` and `2π`. `sin` and `tan` are derived from the same reduction.
//!
//! ```rust
//! use interval::Interval;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let x = Interval::new(0.0, std::f64::consts::PI).cos();
//! assert_eq!(x.to_array(), [-1.0, 1.0]);
//! ```

use crate::constants::*;
use crate::interval::Interval;
use crate::rounding::*;
use gcollections::ops::*;
use log::trace;

// `[-inf, -inf]` or `[inf, inf]`.
fn only_infinity(x: &Interval) -> bool {
  x.lo.is_infinite() && x.lo == x.hi
}

// Adds a multiple of 2π to `x` so its lower bound is non-negative, up to rounding.
fn handle_negative(x: Interval) -> Interval {
  if x.lo >= 0.0 {
    x
  }
  else if x.lo == f64::NEG_INFINITY {
    Interval::raw(0.0, f64::INFINITY)
  }
  else {
    let n = (-x.lo / PI_TWICE_LOW).ceil();
    x + PI_TWICE * Interval::from_singleton(n)
  }
}

fn unit(lo: f64, hi: f64) -> Interval {
  Interval::from_range(lo.max(-1.0), hi.min(1.0))
}

impl Interval
{
  pub fn cos(&self) -> Interval {
    if self.is_empty() || only_infinity(self) {
      return EMPTY;
    }
    let t = handle_negative(*self).fmod(&PI_TWICE);
    if sub_hi(t.hi, t.lo) >= PI_TWICE_LOW {
      return unit(-1.0, 1.0);
    }
    // The reduction may leave `t` just below a multiple of 2π where cos reaches 1.
    if t.lo < 0.0 {
      if t.lo >= -PI_LOW && t.hi <= PI_LOW {
        return unit(cos_lo(t.lo).min(cos_lo(t.hi)), 1.0);
      }
      return unit(-1.0, 1.0);
    }
    // cos(x) = -cos(x - π)
    if t.lo >= PI_HIGH {
      return -(t - PI).cos();
    }
    let (lo, hi) = (t.lo, t.hi);
    let rlo = cos_lo(hi);
    let rhi = cos_hi(lo);
    if hi <= PI_LOW {
      unit(rlo, rhi)
    }
    else if hi <= PI_TWICE_LOW {
      unit(-1.0, rlo.max(rhi))
    }
    else {
      unit(-1.0, 1.0)
    }
  }

  /// `sin(x) = cos(x - π/2)`
  pub fn sin(&self) -> Interval {
    if self.is_empty() || only_infinity(self) {
      return EMPTY;
    }
    (self - &PI_HALF).cos()
  }

  /// The whole interval is returned as soon as an asymptote `π/2 + kπ` may be crossed.
  pub fn tan(&self) -> Interval {
    if self.is_empty() || only_infinity(self) {
      return EMPTY;
    }
    let mut t = handle_negative(*self).fmod(&PI);
    if t.lo >= PI_HALF_LOW {
      t = t - PI;
    }
    if t.lo <= -PI_HALF_LOW || t.hi >= PI_HALF_LOW {
      return WHOLE;
    }
    Interval::from_range(tan_lo(t.lo), tan_hi(t.hi))
  }

  /// Values outside `[-1, 1]` are ignored.
  pub fn asin(&self) -> Interval {
    if self.is_empty() || self.hi < -1.0 || self.lo > 1.0 {
      trace!("asin is undefined on {}", self);
      return EMPTY;
    }
    let lo = if self.lo <= -1.0 { -PI_HALF_HIGH } else { asin_lo(self.lo) };
    let hi = if self.hi >= 1.0 { PI_HALF_HIGH } else { asin_hi(self.hi) };
    Interval::from_range(lo, hi)
  }

  /// Values outside `[-1, 1]` are ignored.
  pub fn acos(&self) -> Interval {
    if self.is_empty() || self.hi < -1.0 || self.lo > 1.0 {
      trace!("acos is undefined on {}", self);
      return EMPTY;
    }
    let lo = if self.hi >= 1.0 { 0.0 } else { acos_lo(self.hi) };
    let hi = if self.lo <= -1.0 { PI_HIGH } else { acos_hi(self.lo) };
    Interval::from_range(lo, hi)
  }

  pub fn atan(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    Interval::from_range(atan_lo(self.lo), atan_hi(self.hi))
  }

  pub fn sinh(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    Interval::from_range(sinh_lo(self.lo), sinh_hi(self.hi))
  }

  pub fn cosh(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    if self.hi < 0.0 {
      Interval::from_range(cosh_lo(self.hi), cosh_hi(self.lo))
    }
    else if self.lo >= 0.0 {
      Interval::from_range(cosh_lo(self.lo), cosh_hi(self.hi))
    }
    else {
      let far = if -self.lo > self.hi { self.lo } else { self.hi };
      Interval::from_range(1.0, cosh_hi(far))
    }
  }

  pub fn tanh(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    unit(tanh_lo(self.lo), tanh_hi(self.hi))
  }
}
