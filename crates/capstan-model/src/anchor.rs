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

/// Selects which endpoint of the target interval stays fixed during
/// resolution.
///
/// Resolution never moves the anchored endpoint; only the opposite endpoint
/// is recomputed from the efficiency zones the interval runs through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorMode {
    /// The start stays fixed and the end moves. Time is walked forward from
    /// the start.
    #[default]
    FixedStart,
    /// The end stays fixed and the start moves. Time is walked backward from
    /// the end.
    FixedEnd,
}

impl AnchorMode {
    /// Returns `true` if time is walked in the direction of increasing
    /// instants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_model::anchor::AnchorMode;
    ///
    /// assert!(AnchorMode::FixedStart.is_forward());
    /// assert!(!AnchorMode::FixedEnd.is_forward());
    /// ```
    #[inline]
    pub const fn is_forward(&self) -> bool {
        matches!(self, AnchorMode::FixedStart)
    }
}

impl std::fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorMode::FixedStart => write!(f, "FixedStart"),
            AnchorMode::FixedEnd => write!(f, "FixedEnd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(AnchorMode::default(), AnchorMode::FixedStart);
    }

    #[test]
    fn test_is_forward() {
        assert!(AnchorMode::FixedStart.is_forward());
        assert!(!AnchorMode::FixedEnd.is_forward());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AnchorMode::FixedStart), "FixedStart");
        assert_eq!(format!("{}", AnchorMode::FixedEnd), "FixedEnd");
    }
}
