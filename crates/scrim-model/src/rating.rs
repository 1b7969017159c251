// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Rating Numeric Trait
//!
//! Unified numeric bounds for skill ratings. `RatingValue` collects the
//! integer capabilities the solver relies on into a single alias: intrinsic
//! traits (`PrimInt`, `Signed`), conversion from primitive integers for
//! rank-table lookups, and the marker/formatting bounds shared components
//! expect.
//!
//! ## Motivation
//!
//! The balancing pipeline should remain generic over the rating's integer
//! width while retaining predictable ordering and `f64` conversion for the
//! energy function. Collecting the bounds here keeps generic signatures
//! short and consistent across crates.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for integer types usable as skill ratings.
///
/// These are usually the signed integer types `i16`, `i32`, `i64` and
/// `isize`. Conversion to `f64` for energy computation comes with
/// `PrimInt`'s `ToPrimitive` supertrait.
pub trait RatingValue:
    PrimInt + Signed + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync + Hash
{
}

impl<T> RatingValue for T where
    T: PrimInt + Signed + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rating_value<T: RatingValue>() {}

    #[test]
    fn test_common_integer_types_qualify() {
        assert_rating_value::<i16>();
        assert_rating_value::<i32>();
        assert_rating_value::<i64>();
        assert_rating_value::<isize>();
    }
}
