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

//! # Math Primitives
//!
//! Foundational mathematical structures for calendar and time-window logic.
//! This module currently focuses on closed interval math, the boundary
//! policy shared by every window type in the Capstan crates.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[min, max]` interval type with validation,
//!   predicates (containment, overlap, disjointness), intersection, and
//!   duration measurement.
//!
//! ## Motivation
//!
//! Efficiency resolution manipulates calendar windows constantly. A single,
//! uniformly closed interval type keeps boundary handling consistent across
//! the model and resolver crates instead of re-deciding it per call site.
//!
//! Refer to the `interval` module for detailed APIs and examples.

pub mod interval;
