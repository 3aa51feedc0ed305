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

//! # Capstan Resolve
//!
//! **The Efficiency Resolution Engine for Capstan.**
//!
//! Given a target interval whose duration measures work at the neutral
//! rate, a collection of prioritized efficiency zones, and the choice of
//! which endpoint stays anchored, this crate computes the wall-clock
//! interval the work really occupies.
//!
//! ## Architecture
//!
//! * **`resolver`**: The public entry point
//!   [`resolver::resolve_with_efficiencies`] and the work-accumulation
//!   walk behind it.
//! * **`error`**: Typed validation errors reported before any resolution
//!   work starts.
//! * **`num`**: The [`num::ResolveNumeric`] trait alias bundling the
//!   integer capabilities the walk relies on.
//!
//! A private timeline module collapses overlapping zones into a
//! conflict-free sequence of constant-rate stretches before the walk
//! runs; it never appears in the public API.
//!
//! ## Resolution Pipeline
//!
//! 1.  **Validate**: Reject inverted windows and negative rates up front.
//! 2.  **Project**: Map zone windows into offset space measured from the
//!     anchored endpoint, mirroring them in fixed-end mode so the walk
//!     always runs forward.
//! 3.  **Sweep**: Resolve overlaps pointwise, picking one winning rate
//!     per stretch; uncovered stretches run at the neutral rate.
//! 4.  **Walk**: Trade wall-clock time for work stretch by stretch until
//!     the target amount is exhausted, then map the stopping offset back
//!     to an instant.

pub mod error;
pub mod num;
pub mod resolver;
mod timeline;
