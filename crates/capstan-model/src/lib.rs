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

//! # Capstan Model
//!
//! **The Core Domain Model for Efficiency-Aware Interval Resolution.**
//!
//! This crate defines the data structures used to describe a scheduling
//! problem in which the wall-clock extent of a task depends on the efficiency
//! of the stretches of time it runs through. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! resolution engine (`capstan_resolve`).
//!
//! ## Architecture
//!
//! * **`rate`**: The `Rate` percentage type. `100` is the ambient rate at
//!   which one unit of wall-clock time yields one unit of work.
//! * **`zone`**: The `EfficiencyZone` type, pairing a time window with the
//!   rate in force there and a priority for conflict resolution.
//! * **`anchor`**: The `AnchorMode` enum, selecting which endpoint of the
//!   target interval stays fixed while the other one moves.
//!
//! ## Design Philosophy
//!
//! 1.  **Plain Values**: All model types are small `Copy` values. Collections
//!     of zones are ordinary slices; no bespoke containers are required.
//! 2.  **Fail-Fast**: Constructors validate eagerly (`new` panics, `try_new`
//!     returns `Option`) so the resolver never sees a malformed rate or
//!     window.
//! 3.  **Integer Time**: Instants are primitive integers in an arbitrary unit
//!     chosen by the caller. The model never interprets the unit.

pub mod anchor;
pub mod rate;
pub mod zone;
