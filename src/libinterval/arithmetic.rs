// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Addition, subtraction, multiplication, division and negation.
//!
//! Multiplication and division select the bounds to combine from the signs of the operands, following T. Hickey, Q. Ju and M.H. van Emden, "Interval arithmetic: from principles to implementation", J. ACM 48(5), 2001.
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let x = Interval::new(1.0, 2.0) * Interval::new(-3.0, -2.0);
//! assert!(x.lower() <= -6.0 && -2.0 <= x.upper());
//!
//! let y = Interval::new(1.0, 2.0) / Interval::new(-1.0, 1.0);
//! assert!(y.is_whole());
//! ```

use crate::constants::*;
use crate::interval::Interval;
use crate::rounding::*;
use gcollections::ops::*;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Position of an interval relative to zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Sign {
  /// `hi <= 0` and `lo < 0`.
  Negative,
  /// `lo < 0 < hi`.
  Mixed,
  /// `lo >= 0` and `hi > 0`.
  Positive,
  /// `[0, 0]`.
  Zero
}

fn sign(x: &Interval) -> Sign {
  if x.lo < 0.0 {
    if x.hi > 0.0 { Sign::Mixed } else { Sign::Negative }
  }
  else if x.hi > 0.0 { Sign::Positive }
  else { Sign::Zero }
}

impl<'a, 'b> Add<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn add(self, other: &'b Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    Interval::from_range(add_lo(self.lo, other.lo), add_hi(self.hi, other.hi))
  }
}

impl<'a, 'b> Sub<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn sub(self, other: &'b Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    Interval::from_range(sub_lo(self.lo, other.hi), sub_hi(self.hi, other.lo))
  }
}

impl<'a, 'b> Mul<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn mul(self, other: &'b Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    let (al, ah) = (self.lo, self.hi);
    let (bl, bh) = (other.lo, other.hi);
    let (lo, hi) = match (sign(self), sign(other)) {
      (Sign::Zero, _) | (_, Sign::Zero) => (0.0, 0.0),
      (Sign::Mixed, Sign::Mixed) => (
        mul_lo(al, bh).min(mul_lo(ah, bl)),
        mul_hi(al, bl).max(mul_hi(ah, bh))),
      (Sign::Mixed, Sign::Negative) => (mul_lo(ah, bl), mul_hi(al, bl)),
      (Sign::Mixed, Sign::Positive) => (mul_lo(al, bh), mul_hi(ah, bh)),
      (Sign::Negative, Sign::Mixed) => (mul_lo(al, bh), mul_hi(al, bl)),
      (Sign::Negative, Sign::Negative) => (mul_lo(ah, bh), mul_hi(al, bl)),
      (Sign::Negative, Sign::Positive) => (mul_lo(al, bh), mul_hi(ah, bl)),
      (Sign::Positive, Sign::Mixed) => (mul_lo(ah, bl), mul_hi(ah, bh)),
      (Sign::Positive, Sign::Negative) => (mul_lo(ah, bl), mul_hi(al, bh)),
      (Sign::Positive, Sign::Positive) => (mul_lo(al, bl), mul_hi(ah, bh))
    };
    Interval::from_range(lo, hi)
  }
}

// `y` does not contain zero.
fn div_non_zero(x: &Interval, y: &Interval) -> Interval {
  let (xl, xh) = (x.lo, x.hi);
  let (yl, yh) = (y.lo, y.hi);
  let (lo, hi) =
    if xh < 0.0 {
      if yh < 0.0 { (div_lo(xh, yl), div_hi(xl, yh)) }
      else { (div_lo(xl, yl), div_hi(xh, yh)) }
    }
    else if xl < 0.0 {
      if yh < 0.0 { (div_lo(xh, yh), div_hi(xl, yh)) }
      else { (div_lo(xl, yl), div_hi(xh, yl)) }
    }
    else {
      if yh < 0.0 { (div_lo(xh, yh), div_hi(xl, yl)) }
      else { (div_lo(xl, yh), div_hi(xh, yl)) }
    };
  Interval::from_range(lo, hi)
}

// `y = [0, v]` with `v > 0`.
fn div_positive(x: &Interval, v: f64) -> Interval {
  if x.is_zero() {
    *x
  }
  else if x.zero_in() {
    WHOLE
  }
  else if x.hi < 0.0 {
    Interval::from_range(f64::NEG_INFINITY, div_hi(x.hi, v))
  }
  else {
    Interval::from_range(div_lo(x.lo, v), f64::INFINITY)
  }
}

// `y = [v, 0]` with `v < 0`.
fn div_negative(x: &Interval, v: f64) -> Interval {
  if x.is_zero() {
    *x
  }
  else if x.zero_in() {
    WHOLE
  }
  else if x.hi < 0.0 {
    Interval::from_range(div_lo(x.hi, v), f64::INFINITY)
  }
  else {
    Interval::from_range(f64::NEG_INFINITY, div_hi(x.lo, v))
  }
}

// `y` contains zero strictly inside.
fn div_mixed(x: &Interval) -> Interval {
  if x.is_zero() { *x } else { WHOLE }
}

/// A divisor containing zero strictly inside gives the whole interval, the two unbounded pieces of the exact result are not represented separately.
impl<'a, 'b> Div<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn div(self, other: &'b Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    if other.zero_in() {
      match (other.lo != 0.0, other.hi != 0.0) {
        (true, true) => div_mixed(self),
        (true, false) => div_negative(self, other.lo),
        (false, true) => div_positive(self, other.hi),
        (false, false) => EMPTY
      }
    }
    else {
      div_non_zero(self, other)
    }
  }
}

forward_all_binop!(Add for Interval, add);
forward_all_binop!(Sub for Interval, sub);
forward_all_binop!(Mul for Interval, mul);
forward_all_binop!(Div for Interval, div);

impl<'a> Neg for &'a Interval {
  type Output = Interval;

  fn neg(self) -> Interval {
    if self.is_empty() { EMPTY }
    else { Interval::from_range(-self.hi, -self.lo) }
  }
}

impl Neg for Interval {
  type Output = Interval;

  fn neg(self) -> Interval {
    -&self
  }
}

impl Zero for Interval
{
  fn zero() -> Interval {
    ZERO
  }

  fn is_zero(&self) -> bool {
    Interval::is_zero(self)
  }
}

impl One for Interval
{
  fn one() -> Interval {
    ONE
  }
}
