// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Predefined intervals and enclosures of π.
//!
//! `PI_LOW` is the double nearest to π from below (equal to `std::f64::consts::PI`) and `PI_HIGH` is the next double, so `[PI_LOW, PI_HIGH]` contains π. Halving and doubling are exact in binary, therefore the derived bounds enclose π/2 and 2π.

use crate::interval::Interval;

pub const PI_LOW: f64 = (3373259426.0 + 273688.0 / 2097152.0) / 1073741824.0;
pub const PI_HIGH: f64 = (3373259426.0 + 273689.0 / 2097152.0) / 1073741824.0;
pub const PI_HALF_LOW: f64 = PI_LOW / 2.0;
pub const PI_HALF_HIGH: f64 = PI_HIGH / 2.0;
pub const PI_TWICE_LOW: f64 = PI_LOW * 2.0;
pub const PI_TWICE_HIGH: f64 = PI_HIGH * 2.0;

/// No value, canonically `[+inf, -inf]`.
pub const EMPTY: Interval = Interval::raw(f64::INFINITY, f64::NEG_INFINITY);
/// Every real value.
pub const WHOLE: Interval = Interval::raw(f64::NEG_INFINITY, f64::INFINITY);
pub const ZERO: Interval = Interval::raw(0.0, 0.0);
pub const ONE: Interval = Interval::raw(1.0, 1.0);
pub const PI: Interval = Interval::raw(PI_LOW, PI_HIGH);
pub const PI_HALF: Interval = Interval::raw(PI_HALF_LOW, PI_HALF_HIGH);
pub const PI_TWICE: Interval = Interval::raw(PI_TWICE_LOW, PI_TWICE_HIGH);
