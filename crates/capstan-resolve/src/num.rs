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

//! # Resolver Numeric Trait
//!
//! Unified numeric bounds for the resolution pipeline. `ResolveNumeric`
//! specifies the integer capabilities required by the resolver, including
//! intrinsic traits (`PrimInt`, `Signed`), percentage constants, and
//! by-value checked/saturating arithmetic traits from `capstan_core`.
//!
//! ## Motivation
//!
//! The resolution walk should remain generic over integer instant types
//! while retaining predictable arithmetic semantics. This trait collects
//! the necessary bounds into a single alias, simplifying generic
//! signatures and ensuring consistent overflow handling.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` for numeric fundamentals.
//! - Includes `Zero`, `PlusOne`, `Hundred` constant traits; `Hundred`
//!   anchors the neutral percentage without conversions.
//! - Adds by-value arithmetic traits:
//!   - Checked: add/sub/mul returning `Option<T>`.
//!   - Saturating: sub/mul clamping to type bounds.
//! - Send + Sync for concurrent resolution.
//!
//! Note: work is accumulated at percent scale, so a target duration must
//! fit into the instant type multiplied by 100. Narrow types such as `i8`
//! or `i16` exhaust that headroom almost immediately; `i32` and wider are
//! the practical choices.

use capstan_core::num::{
    constants::{Hundred, PlusOne, Zero},
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types that can be used as timeline instants.
/// This includes integer types that support the required arithmetic
/// operations with both saturating and checked semantics.
/// These are usually the signed integer types `i32`, `i64`, `i128` and `isize`.
///
/// # Note
///
/// `i8` and `i16` satisfy the bounds but overflow the percent-scaled work
/// range for all but trivial durations, so they are of little practical use.
pub trait ResolveNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + Hundred
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + saturating_arithmetic::SaturatingSubVal
    + saturating_arithmetic::SaturatingMulVal
    + Send
    + Sync
{
}

impl<T> ResolveNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + Hundred
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + saturating_arithmetic::SaturatingSubVal
        + saturating_arithmetic::SaturatingMulVal
        + Send
        + Sync
{
}
