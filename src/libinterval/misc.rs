// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exponential and logarithms, measures of an interval, absolute value, boundwise minimum and maximum.
//!
//! Measures return a number, `0` for the empty interval.

use crate::constants::*;
use crate::interval::Interval;
use crate::rounding::*;
use gcollections::ops::*;
use log::trace;

impl Interval
{
  /// The lower bound never goes below `0`.
  pub fn exp(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    Interval::from_range(exp_lo(self.lo).max(0.0), exp_hi(self.hi))
  }

  /// Natural logarithm, non-positive values are ignored.
  pub fn log(&self) -> Interval {
    if self.is_empty() || self.hi <= 0.0 {
      trace!("log is undefined on {}", self);
      return EMPTY;
    }
    let lo = if self.lo <= 0.0 { f64::NEG_INFINITY } else { log_lo(self.lo) };
    Interval::from_range(lo, log_hi(self.hi))
  }

  pub fn ln(&self) -> Interval {
    self.log()
  }

  pub fn log10(&self) -> Interval {
    self.log_base(10.0)
  }

  pub fn log2(&self) -> Interval {
    self.log_base(2.0)
  }

  fn log_base(&self, base: f64) -> Interval {
    self.log() / Interval::from_singleton(base).log()
  }

  /// `hi - lo` rounded up.
  pub fn width(&self) -> f64 {
    if self.is_empty() { 0.0 }
    else { sub_hi(self.hi, self.lo) }
  }

  pub fn radius(&self) -> f64 {
    0.5 * self.width()
  }

  /// The midpoint of the whole interval is `0`.
  pub fn midpoint(&self) -> f64 {
    if self.is_empty() || self.is_whole() { 0.0 }
    else { 0.5 * add_hi(self.lo, self.hi) }
  }

  /// Largest absolute value.
  pub fn magnitude(&self) -> f64 {
    if self.is_empty() { 0.0 }
    else { self.lo.abs().max(self.hi.abs()) }
  }

  /// Smallest absolute value.
  pub fn mignitude(&self) -> f64 {
    if self.is_empty() || self.zero_in() { 0.0 }
    else { self.lo.abs().min(self.hi.abs()) }
  }

  /// The bound with the largest absolute value, sign included.
  pub fn deviance(&self) -> f64 {
    if self.is_empty() { 0.0 }
    else if self.lo.abs() >= self.hi.abs() { self.lo }
    else { self.hi }
  }

  /// `[mignitude, magnitude]`
  pub fn abs(&self) -> Interval {
    if self.is_empty() {
      return EMPTY;
    }
    Interval::from_range(self.mignitude(), self.magnitude())
  }

  /// Boundwise maximum, the empty interval is ignored.
  pub fn max(&self, other: &Interval) -> Interval {
    self.boundwise(other, f64::max)
  }

  /// Boundwise minimum, the empty interval is ignored.
  pub fn min(&self, other: &Interval) -> Interval {
    self.boundwise(other, f64::min)
  }

  fn boundwise(&self, other: &Interval, f: fn(f64, f64) -> f64) -> Interval {
    if self.is_empty() {
      *other
    }
    else if other.is_empty() {
      *self
    }
    else {
      Interval::from_range(f(self.lo, other.lo), f(self.hi, other.hi))
    }
  }
}
