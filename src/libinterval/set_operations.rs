// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hull, intersection, union and difference of intervals.
//!
//! An interval cannot represent two disjoint pieces, therefore `union` and `difference` fail with an `IntervalError` when their exact result is not an interval. Use `hull` for an enclosure of the union.
//!
//! ```rust
//! use interval::Interval;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(3.0, 4.0);
//! assert!(a.union(&b).is_err());
//! assert_eq!(a.hull(&b), Interval::new(1.0, 4.0));
//! ```

use crate::constants::*;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;
use crate::ops::*;
use gcollections::ops::*;
use log::trace;

impl Hull for Interval
{
  type Output = Interval;

  /// The empty interval is the neutral element.
  fn hull(&self, other: &Interval) -> Interval {
    if self.is_empty() {
      *other
    }
    else if other.is_empty() {
      *self
    }
    else {
      Interval::raw(self.lo.min(other.lo), self.hi.max(other.hi))
    }
  }
}

impl Intersection for Interval
{
  type Output = Interval;

  fn intersection(&self, other: &Interval) -> Interval {
    if self.is_empty() || other.is_empty() {
      return EMPTY;
    }
    Interval::from_range(self.lo.max(other.lo), self.hi.min(other.hi))
  }
}

impl Union for Interval
{
  type Output = Result<Interval>;

  /// Fails if the operands do not overlap.
  fn union(&self, other: &Interval) -> Result<Interval> {
    if !self.overlap(other) {
      trace!("{} and {} cannot be joined", self, other);
      return Err(IntervalError::DisjointUnion { x: *self, y: *other });
    }
    Ok(Interval::raw(self.lo.min(other.lo), self.hi.max(other.hi)))
  }
}

impl Difference for Interval
{
  type Output = Result<Interval>;

  /// Values of `self` not in `other`.
  ///
  /// The bound of `other` becomes an excluded bound of the result, it is stepped with `safe_next` or `safe_prev`. Fails if `other` lies strictly inside `self`.
  fn difference(&self, other: &Interval) -> Result<Interval> {
    if self.is_empty() || other.is_whole() {
      return Ok(EMPTY);
    }
    if !self.overlap(other) {
      return Ok(*self);
    }
    if self.lo < other.lo && other.hi < self.hi {
      trace!("{} \\ {} splits in two", self, other);
      return Err(IntervalError::SplitDifference { x: *self, y: *other });
    }
    let covers_right = other.lo <= self.lo && other.hi == f64::INFINITY;
    let covers_left = other.hi >= self.hi && other.lo == f64::NEG_INFINITY;
    if covers_right || covers_left {
      Ok(EMPTY)
    }
    else if other.lo <= self.lo {
      Ok(Interval::half_open_left(other.hi, self.hi))
    }
    else {
      Ok(Interval::half_open_right(self.lo, other.lo))
    }
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::rounding;

  const INF: f64 = f64::INFINITY;

  const i1_2: Interval = Interval::raw(1.0, 2.0);
  const i2_3: Interval = Interval::raw(2.0, 3.0);
  const i3_4: Interval = Interval::raw(3.0, 4.0);
  const i1_4: Interval = Interval::raw(1.0, 4.0);
  const i1_3: Interval = Interval::raw(1.0, 3.0);

  #[test]
  fn hull() {
    assert_eq!(i1_2.hull(&i3_4), i1_4);
    assert_eq!(i3_4.hull(&i1_2), i1_4);
    assert_eq!(i1_2.hull(&EMPTY), i1_2);
    assert_eq!(EMPTY.hull(&i1_2), i1_2);
    assert!(EMPTY.hull(&EMPTY).is_empty());
    assert_eq!(i1_2.hull(&WHOLE), WHOLE);
  }

  #[test]
  fn intersection() {
    assert_eq!(i1_3.intersection(&i2_3), i2_3);
    assert_eq!(i1_2.intersection(&i2_3), Interval::new(2.0, 2.0));
    assert!(i1_2.intersection(&i3_4).is_empty());
    assert!(i1_2.intersection(&EMPTY).is_empty());
    assert!(EMPTY.intersection(&i1_2).is_empty());
    assert_eq!(WHOLE.intersection(&i1_2), i1_2);
  }

  #[test]
  fn union() {
    assert_eq!(i1_2.union(&i2_3), Ok(i1_3));
    assert_eq!(i1_4.union(&i2_3), Ok(i1_4));
    assert_eq!(i1_2.union(&WHOLE), Ok(WHOLE));
    assert_eq!(
      i1_2.union(&i3_4),
      Err(IntervalError::DisjointUnion { x: i1_2, y: i3_4 }));
    assert!(i1_2.union(&EMPTY).is_err());
  }

  #[test]
  fn idempotence() {
    for x in [i1_2, i1_4, WHOLE].iter() {
      assert_eq!(x.union(x), Ok(*x));
      assert_eq!(x.intersection(x), *x);
      assert_eq!(x.hull(x), *x);
    }
  }

  #[test]
  fn difference() {
    let x = i1_3.difference(&i2_3).unwrap();
    assert_eq!(x.lower(), 1.0);
    assert!(x.upper() < 2.0 && x.upper() == rounding::safe_prev(2.0));

    let x = i1_3.difference(&i1_2).unwrap();
    assert!(x.lower() > 2.0 && x.lower() == rounding::safe_next(2.0));
    assert_eq!(x.upper(), 3.0);

    assert_eq!(i1_2.difference(&i3_4), Ok(i1_2));
    assert_eq!(i1_2.difference(&i1_4), Ok(EMPTY));
  }

  #[test]
  fn difference_unbounded() {
    assert_eq!(i1_4.difference(&WHOLE), Ok(EMPTY));
    assert_eq!(i1_4.difference(&Interval::new(0.0, INF)), Ok(EMPTY));
    assert_eq!(i1_4.difference(&Interval::new(-INF, 5.0)), Ok(EMPTY));
    assert!(EMPTY.difference(&i1_2).unwrap().is_empty());
    assert_eq!(i1_2.difference(&EMPTY), Ok(i1_2));
  }

  #[test]
  fn difference_split() {
    assert_eq!(
      i1_4.difference(&i2_3),
      Err(IntervalError::SplitDifference { x: i1_4, y: i2_3 }));
  }

  #[test]
  fn difference_ignores_rounding_mode() {
    rounding::without_rounding(|| {
      let x = i1_3.difference(&i2_3).unwrap();
      assert!(x.upper() < 2.0);
    });
  }
}
