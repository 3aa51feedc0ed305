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

use crate::rate::Rate;
use capstan_core::math::interval::Interval;
use num_traits::PrimInt;

/// A stretch of time with a non-standard work rate.
///
/// An efficiency zone pairs a closed time window with the [`Rate`] in force
/// there. Outside of every zone the ambient rate of `100` applies.
///
/// Where zones overlap, the `priority` decides which rate is in force at
/// each instant: the numerically lower priority wins, and among zones with
/// equal priority the slower rate wins. The default priority is `0`, so
/// plain zones tie and fall back to the slower-rate rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EfficiencyZone<T>
where
    T: PrimInt,
{
    window: Interval<T>,
    rate: Rate<T>,
    priority: i32,
}

impl<T> EfficiencyZone<T>
where
    T: PrimInt,
{
    /// Creates a new `EfficiencyZone` with the default priority of `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    /// # use capstan_model::{rate::Rate, zone::EfficiencyZone};
    ///
    /// let zone = EfficiencyZone::new(Interval::new(0, 10), Rate::new(50));
    /// assert_eq!(zone.priority(), 0);
    /// ```
    #[inline]
    pub fn new(window: Interval<T>, rate: Rate<T>) -> Self {
        Self {
            window,
            rate,
            priority: 0,
        }
    }

    /// Returns this zone with its priority replaced.
    ///
    /// Lower values win conflicts against higher ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    /// # use capstan_model::{rate::Rate, zone::EfficiencyZone};
    ///
    /// let zone = EfficiencyZone::new(Interval::new(0, 10), Rate::new(50)).with_priority(-1);
    /// assert_eq!(zone.priority(), -1);
    /// ```
    #[inline]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the time window this zone covers.
    #[inline]
    pub const fn window(&self) -> Interval<T> {
        self.window
    }

    /// Returns the rate in force inside the window.
    #[inline]
    pub const fn rate(&self) -> Rate<T> {
        self.rate
    }

    /// Returns the conflict-resolution priority. Lower values win.
    #[inline]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the inclusive lower endpoint of the window.
    #[inline]
    pub const fn min(&self) -> T {
        self.window.min()
    }

    /// Returns the inclusive upper endpoint of the window.
    #[inline]
    pub const fn max(&self) -> T {
        self.window.max()
    }

    /// Returns the duration of the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_core::math::interval::Interval;
    /// # use capstan_model::{rate::Rate, zone::EfficiencyZone};
    ///
    /// let zone = EfficiencyZone::new(Interval::new(5, 25), Rate::new(200));
    /// assert_eq!(zone.duration(), 20);
    /// ```
    #[inline]
    pub fn duration(&self) -> T {
        self.window.duration()
    }
}

impl<T> std::fmt::Debug for EfficiencyZone<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EfficiencyZone")
            .field("window", &self.window)
            .field("rate", &self.rate)
            .field("priority", &self.priority)
            .finish()
    }
}

impl<T> std::fmt::Display for EfficiencyZone<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} (priority {})",
            self.window, self.rate, self.priority
        )
    }
}
