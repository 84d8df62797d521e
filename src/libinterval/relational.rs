// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comparison of intervals.
//!
//! The ordering predicates are "certain" comparisons (see the `compare/certain` policy of Boost Interval): `x.less_than(&y)` holds only if every value of `x` is less than every value of `y`. Overlapping or empty operands make them return `false`.
//!
//! The `cmp_*` variants distinguish the case where the comparison holds for some values but not for others: they return `SKleene::Unknown` instead of `false`.

use crate::interval::Interval;
use gcollections::ops::*;
use trilean::SKleene;

/// Two empty intervals are equal whatever their bounds.
impl PartialEq for Interval
{
  fn eq(&self, other: &Interval) -> bool {
    if self.is_empty() {
      other.is_empty()
    }
    else {
      !other.is_empty() && self.lo == other.lo && self.hi == other.hi
    }
  }
}

fn certain(yes: bool, no: bool) -> SKleene {
  if yes { SKleene::True }
  else if no { SKleene::False }
  else { SKleene::Unknown }
}

impl Interval
{
  /// `x` and `y` certainly denote different values: they are disjoint, or only one of them is empty.
  pub fn not_equal(&self, other: &Interval) -> bool {
    if self.is_empty() {
      !other.is_empty()
    }
    else {
      other.is_empty() || self.hi < other.lo || self.lo > other.hi
    }
  }

  /// Every value of `self` is less than every value of `other`.
  pub fn less_than(&self, other: &Interval) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else { self.hi < other.lo }
  }

  pub fn greater_than(&self, other: &Interval) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else { self.lo > other.hi }
  }

  pub fn less_equal(&self, other: &Interval) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else { self.hi <= other.lo }
  }

  pub fn greater_equal(&self, other: &Interval) -> bool {
    if self.is_empty() || other.is_empty() { false }
    else { self.lo >= other.hi }
  }

  pub fn cmp_lt(&self, other: &Interval) -> SKleene {
    if self.is_empty() || other.is_empty() { SKleene::Unknown }
    else { certain(self.hi < other.lo, self.lo >= other.hi) }
  }

  pub fn cmp_le(&self, other: &Interval) -> SKleene {
    if self.is_empty() || other.is_empty() { SKleene::Unknown }
    else { certain(self.hi <= other.lo, self.lo > other.hi) }
  }

  pub fn cmp_gt(&self, other: &Interval) -> SKleene {
    other.cmp_lt(self)
  }

  pub fn cmp_ge(&self, other: &Interval) -> SKleene {
    other.cmp_le(self)
  }

  /// `True` only for two equal singletons.
  pub fn cmp_eq(&self, other: &Interval) -> SKleene {
    if self.is_empty() || other.is_empty() { SKleene::Unknown }
    else {
      certain(
        self.is_singleton() && other.is_singleton() && self.lo == other.lo,
        self.is_disjoint(other))
    }
  }
}
