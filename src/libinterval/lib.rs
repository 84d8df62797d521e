// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval arithmetic with floating point bounds and outward rounding.
//!
//! Every operation on `[lo, hi]` returns an interval enclosing every possible exact result: the lower bound is rounded down and the upper bound is rounded up (see the [rounding module](rounding/index.html)). Undefined results, such as the logarithm of a negative interval, are reported with the empty interval which propagates through the other operations.
//!
//! The operations are grouped by category: [arithmetic](arithmetic/index.html), [algebra](algebra/index.html), [trigonometry](trigonometry/index.html), [set operations](set_operations/index.html), [measures and logarithms](misc/index.html) and [comparisons](relational/index.html). Most of them are methods of `Interval`, the set vocabulary comes from the `gcollections` traits.
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//! use interval::constants::PI;
//! use interval::ops::*;
//! use gcollections::ops::*;
//!
//! let x = Interval::new(0.0, 1.0);
//! let y = x.exp().sin() + (x.tan() - PI.cos().multiplicative_inverse() * Interval::new(1.0, 3.0).pow(2));
//! assert!(y.lower() <= 1.4107812 && 11.5574077 <= y.upper());
//!
//! assert!(Interval::new(-1.0, -1.0).sqrt().is_empty());
//! ```
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * T. Hickey, Q. Ju and M.H. van Emden, "Interval arithmetic: from principles to implementation", J. ACM 48(5), 2001.

#[macro_use]
mod macros;
#[cfg(test)]
mod testing;

pub mod algebra;
pub mod arithmetic;
pub mod constants;
pub mod error;
pub mod interval;
pub mod misc;
pub mod ops;
pub mod relational;
pub mod rounding;
pub mod set_operations;
pub mod trigonometry;

pub use crate::error::{IntervalError, Result};
pub use crate::interval::Interval;
