// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Modulo, multiplicative inverse, integer power and n-th root.
//!
//! Undefined results (`0^0`, `1/[0,0]`, even roots of negative values) are reported with the empty interval.
//!
//! ```rust
//! use interval::Interval;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let x = Interval::new(2.0, 3.0).pow(2);
//! assert!(x.lower() <= 4.0 && 9.0 <= x.upper());
//! assert!(Interval::new(-9.0, -4.0).sqrt().is_empty());
//! ```

use crate::constants::*;
use crate::interval::Interval;
use crate::rounding::*;
use gcollections::ops::*;
use log::trace;
use num_integer::Integer;
use num_traits::{Inv, Pow};
use std::ops::Rem;

/// `x - y * n` where `n` is the quotient of `x.lo` by a bound of `y`, truncated toward zero.
impl<'a, 'b> Rem<&'b Interval> for &'a Interval {
  type Output = Interval;

  fn rem(self, other: &'b Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    let yb = if self.lo < 0.0 { other.lo } else { other.hi };
    let n = self.lo / yb;
    if !n.is_finite() {
      trace!("{} mod {} has no finite quotient", self, other);
      return EMPTY;
    }
    let n = if n < 0.0 { n.ceil() } else { n.floor() };
    self - &(other * &Interval::from_singleton(n))
  }
}

forward_all_binop!(Rem for Interval, rem);

impl Interval
{
  /// `self mod other`, same as the `%` operator.
  pub fn fmod(&self, other: &Interval) -> Interval {
    self % other
  }

  /// `1 / self`.
  pub fn multiplicative_inverse(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    if self.zero_in() {
      match (self.lo != 0.0, self.hi != 0.0) {
        (true, true) => WHOLE,
        (true, false) => Interval::from_range(f64::NEG_INFINITY, div_hi(1.0, self.lo)),
        (false, true) => Interval::from_range(div_lo(1.0, self.hi), f64::INFINITY),
        (false, false) => {
          trace!("the inverse of zero is undefined");
          EMPTY
        }
      }
    }
    else {
      Interval::from_range(div_lo(1.0, self.hi), div_hi(1.0, self.lo))
    }
  }

  /// `self^n` for an integer exponent, a negative exponent raises the inverse of `self`.
  pub fn pow(&self, n: i32) -> Interval {
    if n < 0 {
      self.multiplicative_inverse().pow_unsigned(n.unsigned_abs())
    }
    else {
      self.pow_unsigned(n.unsigned_abs())
    }
  }

  fn pow_unsigned(&self, n: u32) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    if n == 0 {
      if self.is_zero() {
        trace!("0^0 is undefined");
        return EMPTY;
      }
      return ONE;
    }
    if self.hi < 0.0 {
      let yl = pow_lo(-self.hi, n);
      let yh = pow_hi(-self.lo, n);
      if n.is_odd() { Interval::from_range(-yh, -yl) }
      else { Interval::from_range(yl, yh) }
    }
    else if self.lo < 0.0 {
      if n.is_odd() {
        Interval::from_range(-pow_hi(-self.lo, n), pow_hi(self.hi, n))
      }
      else {
        Interval::from_range(0.0, pow_hi(self.hi.max(-self.lo), n))
      }
    }
    else {
      Interval::from_range(pow_lo(self.lo, n), pow_hi(self.hi, n))
    }
  }

  /// `self^n` where `n` must be a singleton holding an integer, otherwise the result is empty.
  pub fn pow_interval(&self, n: &Interval) -> Interval {
    match singleton_integer(n) {
      Some(n) => self.pow(n),
      None => EMPTY
    }
  }

  /// `self^(1/n)`, empty when `n <= 0`.
  ///
  /// Negative values only have a root when `n` is odd, otherwise the negative part is dropped.
  pub fn nth_root(&self, n: i32) -> Interval {
    if self.is_empty() || n <= 0 {
      return EMPTY;
    }
    match n {
      2 => self.nth_root_with(n, sqrt_lo, sqrt_hi),
      3 => self.nth_root_with(n, cbrt_lo, cbrt_hi),
      _ => {
        let power = 1.0 / n as f64;
        self.nth_root_with(n, |x| powf_lo(x, power), |x| powf_hi(x, power))
      }
    }
  }

  fn nth_root_with<L, H>(&self, n: i32, root_lo: L, root_hi: H) -> Interval where
    L: Fn(f64) -> f64,
    H: Fn(f64) -> f64
  {
    if self.hi < 0.0 {
      if n.is_odd() {
        Interval::from_range(-root_hi(-self.lo), -root_lo(-self.hi))
      }
      else {
        trace!("even root of the negative interval {}", self);
        EMPTY
      }
    }
    else if self.lo < 0.0 {
      let hi = root_hi(self.hi);
      if n.is_odd() { Interval::from_range(-root_hi(-self.lo), hi) }
      else { Interval::from_range(0.0, hi) }
    }
    else {
      Interval::from_range(root_lo(self.lo).max(0.0), root_hi(self.hi))
    }
  }

  /// `self^(1/n)` where `n` must be a singleton holding an integer, otherwise the result is empty.
  pub fn nth_root_interval(&self, n: &Interval) -> Interval {
    match singleton_integer(n) {
      Some(n) => self.nth_root(n),
      None => EMPTY
    }
  }

  /// Square root, negative values are ignored.
  pub fn sqrt(&self) -> Interval {
    self.nth_root(2)
  }
}

fn singleton_integer(n: &Interval) -> Option<i32> {
  if n.is_empty() || !n.is_singleton() {
    trace!("{} is not a singleton exponent", n);
    return None;
  }
  let v = n.lo;
  if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
    trace!("{} is not an integer exponent", n);
    return None;
  }
  Some(v as i32)
}

impl Inv for Interval
{
  type Output = Interval;

  fn inv(self) -> Interval {
    self.multiplicative_inverse()
  }
}

impl<'a> Inv for &'a Interval
{
  type Output = Interval;

  fn inv(self) -> Interval {
    self.multiplicative_inverse()
  }
}

impl Pow<i32> for Interval
{
  type Output = Interval;

  fn pow(self, n: i32) -> Interval {
    Interval::pow(&self, n)
  }
}

impl<'a> Pow<i32> for &'a Interval
{
  type Output = Interval;

  fn pow(self, n: i32) -> Interval {
    Interval::pow(self, n)
  }
}
