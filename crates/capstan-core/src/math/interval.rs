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

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A closed interval `[min, max]` defined by two inclusive endpoints.
///
/// This struct represents a contiguous stretch of time between two instants,
/// both of which belong to the interval. Containment and overlap treat the
/// boundaries inclusively, so two intervals that merely touch at an endpoint
/// still share that instant.
///
/// Equality compares both endpoints; ordering is lexicographic on
/// `(min, max)`.
///
/// # Invariants
/// `min` must always be less than or equal to `max`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    min: T,
    max: T,
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.duration(), 10);
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `Interval` if the inputs are valid.
    ///
    /// Returns `None` if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_some());
    /// assert!(Interval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Option<Self> {
        if min <= max { Some(Self { min, max }) } else { None }
    }

    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `min <= max`.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new_unchecked(0, 10);
    /// ```
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Returns the inclusive lower endpoint of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(5, 10);
    /// assert_eq!(iv.min(), 5);
    /// ```
    #[inline]
    pub const fn min(self) -> T {
        self.min
    }

    /// Returns the inclusive upper endpoint of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(5, 10);
    /// assert_eq!(iv.max(), 10);
    /// ```
    #[inline]
    pub const fn max(self) -> T {
        self.max
    }

    /// Returns the duration of the interval (`max - min`).
    ///
    /// The duration is always non-negative. A degenerate interval has
    /// duration zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(10, 25).duration(), 15);
    /// assert_eq!(Interval::new(7, 7).duration(), 0);
    /// ```
    #[inline]
    pub fn duration(&self) -> T {
        self.max - self.min
    }

    /// Returns `true` if the interval is degenerate (`min == max`).
    ///
    /// A degenerate closed interval still contains its single endpoint; it
    /// merely has no extent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(10, 10).is_degenerate());
    /// assert!(!Interval::new(10, 11).is_degenerate());
    /// ```
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// Both boundaries are inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.contains_interval(Interval::new(2, 8)));
    /// assert!(a.contains_interval(a));
    /// assert!(!a.contains_interval(Interval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Returns `true` if this interval shares at least one instant with `other`.
    ///
    /// Because both boundaries are inclusive, intervals that touch at a
    /// single endpoint overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.intersects(Interval::new(5, 15)));
    /// assert!(a.intersects(Interval::new(10, 20))); // Shares the instant 10
    /// assert!(!a.intersects(Interval::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Returns `true` if the intervals share no instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.disjoint(Interval::new(11, 20)));
    /// assert!(!a.disjoint(Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects(other)
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals are disjoint. Intervals touching at a
    /// single endpoint intersect in a degenerate interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(Interval::new(5, 10)));
    ///
    /// let c = Interval::new(10, 20);
    /// assert_eq!(a.intersection(c), Some(Interval::new(10, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_min = max(self.min, other.min);
        let new_max = min(self.max, other.max);

        if new_min <= new_max {
            Some(Self::new_unchecked(new_min, new_max))
        } else {
            None
        }
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            min: T::zero(),
            max: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = Interval::new(10, 20);
        assert_eq!(iv.min(), 10);
        assert_eq!(iv.max(), 20);
        assert_eq!(iv.duration(), 10);
        assert!(!iv.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let iv = Interval::new(10, 10);
        assert_eq!(iv.min(), 10);
        assert_eq!(iv.max(), 10);
        assert_eq!(iv.duration(), 0);
        assert!(iv.is_degenerate());
    }

    #[test]
    fn test_try_new() {
        assert!(Interval::try_new(5, 10).is_some());
        assert!(Interval::try_new(5, 5).is_some());
        // Invalid: min > max
        assert!(Interval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        Interval::new(10, 5);
    }

    #[test]
    fn test_default() {
        let iv: Interval<i32> = Default::default();
        assert!(iv.is_degenerate());
        assert_eq!(iv.min(), 0);
        assert_eq!(iv.max(), 0);
    }

    #[test]
    fn test_contains_point() {
        let a = Interval::new(0, 10);
        assert!(a.contains_point(0)); // Inclusive lower bound
        assert!(a.contains_point(5));
        assert!(a.contains_point(10)); // Inclusive upper bound
        assert!(!a.contains_point(11));
        assert!(!a.contains_point(-1));
    }

    #[test]
    fn test_contains_point_degenerate() {
        let a = Interval::new(5, 5);
        assert!(a.contains_point(5));
        assert!(!a.contains_point(4));
        assert!(!a.contains_point(6));
    }

    #[test]
    fn test_contains_interval() {
        let main = Interval::new(0, 10);

        // Exact match
        assert!(main.contains_interval(Interval::new(0, 10)));
        // Strict subset
        assert!(main.contains_interval(Interval::new(2, 8)));
        // Touching bounds
        assert!(main.contains_interval(Interval::new(0, 5)));
        assert!(main.contains_interval(Interval::new(5, 10)));

        // Overflowing bounds
        assert!(!main.contains_interval(Interval::new(-1, 5)));
        assert!(!main.contains_interval(Interval::new(5, 11)));

        // Disjoint
        assert!(!main.contains_interval(Interval::new(20, 30)));
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 10);

        // Disjoint left
        assert!(!a.intersects(Interval::new(-5, -1)));
        // Touching left endpoint - closed intervals share the instant
        assert!(a.intersects(Interval::new(-5, 0)));
        // Overlap left
        assert!(a.intersects(Interval::new(-5, 5)));
        // Contained
        assert!(a.intersects(Interval::new(2, 8)));
        // Identity
        assert!(a.intersects(a));
        // Overlap right
        assert!(a.intersects(Interval::new(5, 15)));
        // Touching right endpoint
        assert!(a.intersects(Interval::new(10, 15)));
        // Disjoint right
        assert!(!a.intersects(Interval::new(11, 15)));
    }

    #[test]
    fn test_disjoint() {
        let a = Interval::new(0, 10);
        assert!(a.disjoint(Interval::new(15, 20)));
        assert!(!a.disjoint(Interval::new(5, 15)));
        // Touching endpoints are not disjoint for closed intervals
        assert!(!a.disjoint(Interval::new(10, 15)));
    }

    #[test]
    fn test_intersection() {
        let a = Interval::new(0, 10);
        let b = Interval::new(5, 15);

        // Standard overlap
        assert_eq!(a.intersection(b), Some(Interval::new(5, 10)));

        // Subset
        let c = Interval::new(2, 8);
        assert_eq!(a.intersection(c), Some(c));

        // Touching endpoints yield a degenerate intersection
        let d = Interval::new(10, 20);
        assert_eq!(a.intersection(d), Some(Interval::new(10, 10)));

        // Disjoint
        let e = Interval::new(12, 20);
        assert_eq!(a.intersection(e), None);
    }

    #[test]
    fn test_ordering_lexicographic() {
        let a = Interval::new(0, 10);
        let b = Interval::new(0, 12);
        let c = Interval::new(1, 2);

        assert!(a < b); // Same min, smaller max first
        assert!(b < c); // Smaller min first regardless of max
        assert_eq!(a, Interval::new(0, 10));
    }

    #[test]
    fn test_traits_display_debug() {
        let a = Interval::new(10, 20);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(format!("{:?}", a), "Interval { min: 10, max: 20 }");
    }

    #[test]
    fn test_negative_endpoints() {
        let a = Interval::new(-10, -4);
        assert_eq!(a.duration(), 6);
        assert!(a.contains_point(-10));
        assert!(a.contains_point(-4));
        assert!(!a.contains_point(0));
    }
}
