// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assertions shared by the test modules.

use crate::interval::Interval;
use approx::abs_diff_eq;

pub const EPS: f64 = 1e-7;

/// Bounds are within `EPS` of `expected`, infinite bounds must match exactly.
pub fn assert_almost_eq(x: Interval, expected: [f64; 2]) {
  let actual = x.to_array();
  for (a, e) in actual.iter().zip(expected.iter()) {
    if e.is_infinite() {
      assert_eq!(a, e, "{:?} is not close to {:?}", x, expected);
    }
    else {
      assert!(abs_diff_eq!(*a, *e, epsilon = EPS), "{:?} is not close to {:?}", x, expected);
    }
  }
}

/// `x` is close to `expected` and contains it.
pub fn assert_encloses(x: Interval, expected: [f64; 2]) {
  assert_almost_eq(x, expected);
  let [lo, hi] = x.to_array();
  assert!(lo <= expected[0], "{} should be less or equal than {}", lo, expected[0]);
  assert!(expected[1] <= hi, "{} should be less or equal than {}", expected[1], hi);
}
