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

use capstan_core::num::constants;
use num_traits::PrimInt;

/// An efficiency rate expressed as an integer percentage.
///
/// A rate of `100` is neutral: one unit of wall-clock time yields one unit of
/// work. Rates below `100` slow work down, rates above `100` speed it up, and
/// a rate of `0` means time passes without any work being done. Negative
/// rates are not representable.
///
/// Storing the percentage as an integer keeps all downstream arithmetic
/// exact; there is no floating-point anywhere in the resolution path.
///
/// Equality and ordering compare the underlying percentage, so a slower rate
/// orders before a faster one.
///
/// # Invariants
/// The wrapped value must always be non-negative.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate<T>(T)
where
    T: PrimInt;

impl<T> Rate<T>
where
    T: PrimInt,
{
    /// Creates a new `Rate`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// let half_speed = Rate::new(50);
    /// assert_eq!(half_speed.value(), 50);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        assert!(
            value >= T::zero(),
            "Invalid rate: value must be non-negative"
        );
        Rate(value)
    }

    /// Creates a new `Rate` if the input is valid.
    ///
    /// Returns `None` if `value` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// assert!(Rate::try_new(150).is_some());
    /// assert!(Rate::try_new(-1).is_none());
    /// ```
    #[inline]
    pub fn try_new(value: T) -> Option<Self> {
        if value >= T::zero() { Some(Rate(value)) } else { None }
    }

    /// Creates a new `Rate` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `value` is non-negative.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// let rate = Rate::new_unchecked(200);
    /// assert_eq!(rate.value(), 200);
    /// ```
    #[inline]
    pub fn new_unchecked(value: T) -> Self {
        debug_assert!(
            value >= T::zero(),
            "Invalid rate: value must be non-negative"
        );
        Rate(value)
    }

    /// Returns the neutral rate of `100`.
    ///
    /// This is the rate in force wherever no zone applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// let neutral: Rate<i32> = Rate::neutral();
    /// assert_eq!(neutral.value(), 100);
    /// ```
    #[inline]
    pub fn neutral() -> Self
    where
        T: constants::Hundred,
    {
        Rate(T::HUNDRED)
    }

    /// Returns the zero rate.
    ///
    /// Time spent at this rate is consumed without producing any work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// let idle: Rate<i32> = Rate::zero();
    /// assert!(idle.is_zero());
    /// ```
    #[inline]
    pub fn zero() -> Self {
        Rate(T::zero())
    }

    /// Returns the underlying percentage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// assert_eq!(Rate::new(150).value(), 150);
    /// ```
    #[inline]
    pub const fn value(&self) -> T {
        self.0
    }

    /// Returns `true` if this is the neutral rate of `100`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// assert!(Rate::new(100).is_neutral());
    /// assert!(!Rate::new(99).is_neutral());
    /// ```
    #[inline]
    pub fn is_neutral(&self) -> bool
    where
        T: constants::Hundred,
    {
        self.0 == T::HUNDRED
    }

    /// Returns `true` if this is the zero rate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::rate::Rate;
    ///
    /// assert!(Rate::new(0).is_zero());
    /// assert!(!Rate::new(1).is_zero());
    /// ```
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == T::zero()
    }
}

impl<T> Default for Rate<T>
where
    T: PrimInt + constants::Hundred,
{
    /// The default rate is the neutral `100`.
    #[inline]
    fn default() -> Self {
        Self::neutral()
    }
}

impl<T> std::fmt::Debug for Rate<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rate({:?})", self.0)
    }
}

impl<T> std::fmt::Display for Rate<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let rate = Rate::new(75);
        assert_eq!(rate.value(), 75);
        assert!(!rate.is_zero());
        assert!(!rate.is_neutral());
    }

    #[test]
    fn test_construction_zero() {
        let rate = Rate::new(0);
        assert!(rate.is_zero());
        assert_eq!(rate, Rate::zero());
    }

    #[test]
    #[should_panic(expected = "Invalid rate")]
    fn test_new_panic() {
        Rate::new(-10);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Rate::try_new(0), Some(Rate::zero()));
        assert_eq!(Rate::try_new(100), Some(Rate::neutral()));
        // Invalid: negative percentage
        assert!(Rate::try_new(-1).is_none());
    }

    #[test]
    fn test_neutral() {
        let neutral: Rate<i64> = Rate::neutral();
        assert_eq!(neutral.value(), 100);
        assert!(neutral.is_neutral());
        assert!(!neutral.is_zero());
    }

    #[test]
    fn test_default_is_neutral() {
        let rate: Rate<i32> = Default::default();
        assert!(rate.is_neutral());
    }

    #[test]
    fn test_ordering() {
        // Slower rates order first.
        assert!(Rate::new(0) < Rate::new(50));
        assert!(Rate::new(50) < Rate::new(100));
        assert!(Rate::new(100) < Rate::new(200));
    }

    #[test]
    fn test_traits_display_debug() {
        let rate = Rate::new(120);
        assert_eq!(format!("{}", rate), "120%");
        assert_eq!(format!("{:?}", rate), "Rate(120)");
    }
}
