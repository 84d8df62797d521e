// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed interval with floating point bounds.
//!
//! An interval `[lo, hi]` represents every real value `x` such that `lo <= x <= hi`. The empty interval is represented by any pair with `lo > hi`, canonically `[+inf, -inf]`, and the whole real line by `[-inf, +inf]`.
//!
//! Intervals are small `Copy` values: operations never modify their operands and always return a new interval. The setters (`set`, `assign`,...) mutate an interval in place and return it, so they can be chained.
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(1.0, 2.0);
//! assert!(a.contains(&1.5));
//! assert!(Interval::new(2.0, 1.0).is_empty());
//!
//! // Encloses 1/3 although it is not representable.
//! let third = Interval::bounded_singleton(1.0 / 3.0);
//! assert!(third.lower() < 1.0 / 3.0 && 1.0 / 3.0 < third.upper());
//! ```

use crate::error::{IntervalError, Result};
use crate::ops::*;
use crate::rounding;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt::{Display, Error, Formatter};

#[derive(Debug, Copy, Clone)]
pub struct Interval {
  pub(crate) lo: f64,
  pub(crate) hi: f64
}

impl Interval
{
  /// Builds `[lo, hi]` without any check.
  pub(crate) const fn raw(lo: f64, hi: f64) -> Interval {
    Interval { lo, hi }
  }

  /// `[lo, hi]`, or the empty interval if `lo > hi` or one of the bounds is NaN.
  pub fn from_range(lo: f64, hi: f64) -> Interval {
    *Interval::empty().assign(lo, hi)
  }

  /// `[v, v]`.
  pub fn from_singleton(v: f64) -> Interval {
    Interval::from_range(v, v)
  }

  /// `[bounds[0], bounds[1]]` with the same checks as `from_range`.
  pub fn from_array(bounds: [f64; 2]) -> Interval {
    Interval::from_range(bounds[0], bounds[1])
  }

  /// `[lo, hi]` from two singleton intervals.
  pub fn from_singletons(lo: &Interval, hi: &Interval) -> Result<Interval> {
    if !lo.is_singleton() {
      return Err(IntervalError::NonSingletonBound { bound: *lo });
    }
    if !hi.is_singleton() {
      return Err(IntervalError::NonSingletonBound { bound: *hi });
    }
    Ok(Interval::from_range(lo.lo, hi.hi))
  }

  /// Strict version of `from_range`: fails instead of returning the empty interval.
  pub fn try_new(lo: f64, hi: f64) -> Result<Interval> {
    if lo.is_nan() || hi.is_nan() || lo > hi {
      Err(IntervalError::InvalidBounds { lo, hi })
    }
    else {
      Ok(Interval::raw(lo, hi))
    }
  }

  /// `[prev(lo), next(hi)]`, encloses values whose double representation is inexact such as `1/3`.
  pub fn bounded(lo: f64, hi: f64) -> Interval {
    *Interval::empty().set_bounded(lo, hi)
  }

  pub fn bounded_singleton(v: f64) -> Interval {
    Interval::bounded(v, v)
  }

  /// Open interval `(lo, hi)`: the closest closed interval excluding both bounds.
  ///
  /// The bounds are always stepped, even if rounding is disabled.
  pub fn open(lo: f64, hi: f64) -> Interval {
    Interval::from_range(rounding::safe_next(lo), rounding::safe_prev(hi))
  }

  /// `(lo, hi]`
  pub fn half_open_left(lo: f64, hi: f64) -> Interval {
    Interval::from_range(rounding::safe_next(lo), hi)
  }

  /// `[lo, hi)`
  pub fn half_open_right(lo: f64, hi: f64) -> Interval {
    Interval::from_range(lo, rounding::safe_prev(hi))
  }

  /// Sets the bounds without any check.
  pub fn set(&mut self, lo: f64, hi: f64) -> &mut Interval {
    self.lo = lo;
    self.hi = hi;
    self
  }

  /// Sets the bounds, the interval becomes empty if `lo > hi` or one of the bounds is NaN.
  pub fn assign(&mut self, lo: f64, hi: f64) -> &mut Interval {
    if lo.is_nan() || hi.is_nan() || lo > hi {
      self.set_empty()
    }
    else {
      self.set(lo, hi)
    }
  }

  pub fn set_empty(&mut self) -> &mut Interval {
    self.set(f64::INFINITY, f64::NEG_INFINITY)
  }

  pub fn set_whole(&mut self) -> &mut Interval {
    self.set(f64::NEG_INFINITY, f64::INFINITY)
  }

  pub fn set_singleton(&mut self, v: f64) -> &mut Interval {
    self.assign(v, v)
  }

  pub fn set_bounded(&mut self, lo: f64, hi: f64) -> &mut Interval {
    self.assign(rounding::prev(lo), rounding::next(hi))
  }

  pub fn to_array(&self) -> [f64; 2] {
    [self.lo, self.hi]
  }

  /// `[-inf, +inf]`
  pub fn is_whole(&self) -> bool {
    self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY
  }

  pub fn zero_in(&self) -> bool {
    self.contains(&0.0)
  }

  /// Every value is strictly positive.
  pub fn is_positive(&self) -> bool {
    !self.is_empty() && self.lo > 0.0
  }

  pub fn is_not_negative(&self) -> bool {
    !self.is_empty() && self.lo >= 0.0
  }

  /// `[0, 0]`
  pub fn is_zero(&self) -> bool {
    self.lo == 0.0 && self.hi == 0.0
  }
}

impl Default for Interval
{
  fn default() -> Interval {
    Interval::raw(0.0, 0.0)
  }
}

impl Collection for Interval
{
  type Item = f64;
}

impl Range for Interval
{
  fn new(lb: f64, ub: f64) -> Interval {
    Interval::from_range(lb, ub)
  }
}

/// The bounds of the empty interval are `+inf` and `-inf`.
impl Bounded for Interval
{
  fn lower(&self) -> f64 {
    self.lo
  }

  fn upper(&self) -> f64 {
    self.hi
  }
}

impl Singleton for Interval
{
  fn singleton(x: f64) -> Interval {
    Interval::from_singleton(x)
  }
}

impl Empty for Interval
{
  fn empty() -> Interval {
    Interval::raw(f64::INFINITY, f64::NEG_INFINITY)
  }
}

impl Whole for Interval
{
  fn whole() -> Interval {
    Interval::raw(f64::NEG_INFINITY, f64::INFINITY)
  }
}

impl IsSingleton for Interval
{
  fn is_singleton(&self) -> bool {
    self.lo == self.hi
  }
}

impl IsEmpty for Interval
{
  fn is_empty(&self) -> bool {
    self.lo > self.hi
  }
}

impl Contains for Interval
{
  fn contains(&self, value: &f64) -> bool {
    !self.is_empty() && self.lo <= *value && *value <= self.hi
  }
}

impl Subset for Interval
{
  fn is_subset(&self, other: &Interval) -> bool {
    if self.is_empty() { true }
    else {
      !other.is_empty() && other.lo <= self.lo && self.hi <= other.hi
    }
  }
}

impl ProperSubset for Interval
{
  fn is_proper_subset(&self, other: &Interval) -> bool {
    self.is_subset(other) && self != other
  }
}

/// Two intervals overlap if they share at least one value, touching bounds included.
impl Overlap for Interval
{
  fn overlap(&self, other: &Interval) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else {
      (self.lo <= other.lo && other.lo <= self.hi) ||
      (other.lo <= self.lo && self.lo <= other.hi)
    }
  }
}

impl Disjoint for Interval
{
  fn is_disjoint(&self, other: &Interval) -> bool {
    !self.overlap(other)
  }
}

pub trait ToInterval {
  fn to_interval(self) -> Interval;
}

impl ToInterval for Interval {
  fn to_interval(self) -> Interval { self }
}

impl ToInterval for (f64, f64) {
  fn to_interval(self) -> Interval {
    let (a, b) = self;
    Interval::from_range(a, b)
  }
}

impl ToInterval for [f64; 2] {
  fn to_interval(self) -> Interval {
    Interval::from_array(self)
  }
}

impl ToInterval for () {
  fn to_interval(self) -> Interval {
    Interval::empty()
  }
}

impl ToInterval for f64 {
  fn to_interval(self) -> Interval {
    Interval::from_singleton(self)
  }
}

impl Display for Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> std::result::Result<(), Error> {
    if self.is_empty() {
      formatter.write_str("{}")
    }
    else {
      formatter.write_fmt(format_args!("[{}, {}]", self.lo, self.hi))
    }
  }
}

impl Serialize for Interval
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.lo, self.hi))
    }
  }
}

impl<'de> Deserialize<'de> for Interval
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Interval, D::Error> where
   D: Deserializer<'de>
  {
    match Option::<(f64, f64)>::deserialize(deserializer)? {
      None => Ok(Interval::empty()),
      Some((lo, hi)) => Interval::try_new(lo, hi).map_err(de::Error::custom)
    }
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::*;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  const empty: Interval = EMPTY;
  const invalid: Interval = Interval { lo: 10.0, hi: -10.0 };
  const zero: Interval = Interval { lo: 0.0, hi: 0.0 };
  const i1_2: Interval = Interval { lo: 1.0, hi: 2.0 };
  const i0_10: Interval = Interval { lo: 0.0, hi: 10.0 };
  const im30_m20: Interval = Interval { lo: -30.0, hi: -20.0 };

  #[test]
  fn to_interval_id_test() {
    let id = i1_2.to_interval();
    assert_eq!(i1_2, id);
    assert_eq!(i1_2, Interval::new(1.0, 2.0));
    assert_eq!((1.0, 2.0).to_interval(), i1_2);
    assert_eq!([1.0, 2.0].to_interval(), i1_2);
    assert_eq!(3.0.to_interval(), Interval::new(3.0, 3.0));
    assert!(().to_interval().is_empty());
  }

  #[test]
  fn constructors() {
    assert_eq!(Interval::from_singleton(1.0).to_array(), [1.0, 1.0]);
    assert_eq!(Interval::from_array([-1.0, 1.0]).to_array(), [-1.0, 1.0]);
    assert_eq!(Interval::default(), zero);

    let e = Interval::new(2.0, 1.0);
    assert_eq!(e.to_array(), [f64::INFINITY, f64::NEG_INFINITY]);
    assert!(Interval::new(f64::NAN, 1.0).is_empty());
    assert!(Interval::new(1.0, f64::NAN).is_empty());
    assert!(Interval::from_singleton(f64::NAN).is_empty());

    let w = Interval::new(f64::NEG_INFINITY, f64::INFINITY);
    assert!(w.is_whole());
  }

  #[test]
  fn from_singletons() {
    let a = Interval::from_singleton(1.0);
    let b = Interval::from_singleton(2.0);
    assert_eq!(Interval::from_singletons(&a, &b), Ok(i1_2));
    assert_eq!(Interval::from_singletons(&i1_2, &b),
      Err(IntervalError::NonSingletonBound { bound: i1_2 }));
    assert_eq!(Interval::from_singletons(&a, &i0_10),
      Err(IntervalError::NonSingletonBound { bound: i0_10 }));
    assert!(Interval::from_singletons(&b, &a).unwrap().is_empty());
  }

  #[test]
  fn try_new() {
    assert_eq!(Interval::try_new(1.0, 2.0), Ok(i1_2));
    assert!(matches!(Interval::try_new(2.0, 1.0), Err(IntervalError::InvalidBounds { .. })));
    assert!(Interval::try_new(f64::NAN, 1.0).is_err());
  }

  #[test]
  fn bounded_encloses_inexact_values() {
    let x = Interval::bounded(1.0, 2.0);
    assert_eq!(x.lower(), 0.9999999999999999);
    assert_eq!(x.upper(), 2.0000000000000004);

    let third = 1.0 / 3.0;
    let x = Interval::bounded_singleton(third);
    assert!(x.lower() < third && third < x.upper());
    assert!(Interval::bounded(2.0, 1.0).is_empty());
  }

  #[test]
  fn open_intervals() {
    assert_eq!(Interval::open(2.0, 3.0).to_array(), [2.0000000000000004, 2.9999999999999996]);
    assert_eq!(Interval::half_open_left(2.0, 3.0).to_array(), [2.0000000000000004, 3.0]);
    assert_eq!(Interval::half_open_right(2.0, 3.0).to_array(), [2.0, 2.9999999999999996]);
    assert!(Interval::open(1.0, 1.0).is_empty());
    rounding::without_rounding(|| {
      assert_eq!(Interval::open(2.0, 3.0).to_array(), [2.0000000000000004, 2.9999999999999996]);
    });
  }

  #[test]
  fn setters_chain() {
    let mut x = Interval::default();
    x.set(1.0, 2.0);
    assert_eq!(x, i1_2);
    assert!(x.assign(3.0, 1.0).is_empty());
    assert!(x.set_whole().is_whole());
    assert_eq!(*x.set_singleton(4.0), Interval::new(4.0, 4.0));
    assert!(x.set_empty().is_empty());
    let y = *x.set_bounded(1.0, 2.0);
    assert!(y.lower() < 1.0 && y.upper() > 2.0);
  }

  #[test]
  fn emptiness() {
    assert!(empty.is_empty());
    assert!(invalid.is_empty());
    assert!(!zero.is_empty());
    assert!(!WHOLE.is_empty());
    assert!(zero.is_singleton());
    assert!(!i1_2.is_singleton());
    assert!(!empty.is_singleton());
  }

  #[test]
  fn predicates() {
    assert!(Interval::new(-1.0, 1.0).zero_in());
    assert!(i0_10.zero_in());
    assert!(!i1_2.zero_in());
    assert!(!empty.zero_in());

    assert!(i1_2.is_positive());
    assert!(!i0_10.is_positive());
    assert!(i0_10.is_not_negative());
    assert!(!im30_m20.is_not_negative());
    assert!(!empty.is_positive());
    assert!(zero.is_zero());
    assert!(!i0_10.is_zero());
  }

  #[test]
  fn membership() {
    assert!(i0_10.contains(&0.0));
    assert!(i0_10.contains(&10.0));
    assert!(!i0_10.contains(&10.5));
    assert!(!empty.contains(&0.0));
    assert!(WHOLE.contains(&1e308));

    assert!(i1_2.is_subset(&i0_10));
    assert!(!i0_10.is_subset(&i1_2));
    assert!(empty.is_subset(&i1_2));
    assert!(!i1_2.is_subset(&empty));
    assert!(i1_2.is_proper_subset(&i0_10));
    assert!(!i1_2.is_proper_subset(&i1_2));
  }

  #[test]
  fn overlapping() {
    let i0_3 = Interval::new(0.0, 3.0);
    let i2_3 = Interval::new(2.0, 3.0);
    let i0_1 = Interval::new(0.0, 1.0);
    assert!(i0_3.overlap(&i1_2));
    assert!(Interval::new(0.0, 2.0).overlap(&Interval::new(1.0, 3.0)));
    assert!(Interval::new(0.0, 2.0).overlap(&i2_3));
    assert!(!i0_1.overlap(&i2_3));
    assert!(i0_1.is_disjoint(&i2_3));
    assert!(!i0_1.overlap(&empty));
    assert!(empty.is_disjoint(&empty));
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", i1_2), "[1, 2]");
    assert_eq!(format!("{}", Interval::new(-0.5, 0.25)), "[-0.5, 0.25]");
    assert_eq!(format!("{}", empty), "{}");
    assert_eq!(format!("{}", WHOLE), "[-inf, inf]");
  }

  #[test]
  fn serialization() {
    assert_tokens(&i1_2, &[
      Token::Some,
      Token::Tuple { len: 2 },
      Token::F64(1.0),
      Token::F64(2.0),
      Token::TupleEnd
    ]);
    assert_tokens(&empty, &[Token::None]);
    assert_de_tokens_error::<Interval>(&[
      Token::Some,
      Token::Tuple { len: 2 },
      Token::F64(2.0),
      Token::F64(1.0),
      Token::TupleEnd
    ], "invalid interval bounds [2, 1]");
  }
}
