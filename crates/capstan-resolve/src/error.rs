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

//! Error types for the resolution pipeline.
//!
//! Validation runs before any timeline construction and reports the first
//! malformed input it encounters, naming the offending zone index where
//! one applies. The checks mirror the invariants the value types assert
//! in debug builds, so release-mode callers that bypassed those
//! assertions via the unchecked constructors still get a typed error
//! instead of a nonsensical resolution.

use std::fmt::Display;

/// The error type for the resolution process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An interval is inverted (its minimum exceeds its maximum).
    InvalidInterval(InvalidIntervalError),
    /// A zone carries a negative efficiency rate.
    InvalidRate(InvalidRateError),
}

/// Details about an inverted interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIntervalError {
    /// The index of the zone with the inverted window, or `None` if the
    /// target interval itself is inverted.
    pub zone: Option<usize>,
}

impl std::fmt::Display for InvalidIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.zone {
            Some(index) => write!(f, "Zone {} has an inverted window (min exceeds max)", index),
            None => write!(f, "Target interval is inverted (min exceeds max)"),
        }
    }
}

impl std::error::Error for InvalidIntervalError {}

/// Details about a negative efficiency rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRateError {
    /// The index of the zone carrying the negative rate.
    pub zone: usize,
}

impl std::fmt::Display for InvalidRateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone {} has a negative rate", self.zone)
    }
}

impl std::error::Error for InvalidRateError {}

impl Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval(e) => write!(f, "Interval error: {}", e),
            Self::InvalidRate(e) => write!(f, "Rate error: {}", e),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<InvalidIntervalError> for ResolveError {
    fn from(e: InvalidIntervalError) -> Self {
        Self::InvalidInterval(e)
    }
}

impl From<InvalidRateError> for ResolveError {
    fn from(e: InvalidRateError) -> Self {
        Self::InvalidRate(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_error_display() {
        let target = InvalidIntervalError { zone: None };
        assert_eq!(
            target.to_string(),
            "Target interval is inverted (min exceeds max)"
        );

        let zone = InvalidIntervalError { zone: Some(3) };
        assert_eq!(
            zone.to_string(),
            "Zone 3 has an inverted window (min exceeds max)"
        );
    }

    #[test]
    fn test_rate_error_display() {
        let err = InvalidRateError { zone: 7 };
        assert_eq!(err.to_string(), "Zone 7 has a negative rate");
    }

    #[test]
    fn test_resolve_error_wraps_details() {
        let err: ResolveError = InvalidIntervalError { zone: Some(1) }.into();
        assert_eq!(
            err.to_string(),
            "Interval error: Zone 1 has an inverted window (min exceeds max)"
        );

        let err: ResolveError = InvalidRateError { zone: 0 }.into();
        assert_eq!(err.to_string(), "Rate error: Zone 0 has a negative rate");
    }

    #[test]
    fn test_resolve_error_equality() {
        let a: ResolveError = InvalidRateError { zone: 2 }.into();
        let b = ResolveError::InvalidRate(InvalidRateError { zone: 2 });
        assert_eq!(a, b);
    }
}
