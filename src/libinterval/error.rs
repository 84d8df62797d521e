// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failures of operations whose exact result is not a single interval.
//!
//! Domain violations (logarithm of a negative interval, even root of a negative interval,...) are not errors: they produce the empty interval which propagates through every other operation.

use crate::interval::Interval;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntervalError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
  /// The union of two intervals that do not share any point.
  #[error("the union of {x} and {y} is not an interval because they do not overlap")]
  DisjointUnion { x: Interval, y: Interval },

  /// `y` lies strictly inside `x` so `x \ y` has two components.
  #[error("the difference {x} \\ {y} splits into two disjoint intervals")]
  SplitDifference { x: Interval, y: Interval },

  /// An interval used as a bound of another interval must represent one value.
  #[error("{bound} cannot be used as a bound because it is not a singleton")]
  NonSingletonBound { bound: Interval },

  #[error("invalid interval bounds [{lo}, {hi}]")]
  InvalidBounds { lo: f64, hi: f64 },
}
