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

//! # Efficiency Timeline
//!
//! Boundary sweep that turns an unordered set of efficiency zones into a
//! contiguous, conflict-free timeline in anchor-offset space.
//!
//! ## Offset space
//!
//! Every position is measured from the anchor instant, so the sweep and
//! the downstream walk always run forward from offset zero regardless of
//! the anchoring mode. Fixed-start windows map directly; fixed-end
//! windows are mirrored, so a window that ends `d` instants before the
//! anchor starts `d` offsets into the walk. Windows that fall entirely at
//! or behind offset zero carry no usable length and are dropped, and
//! windows straddling zero are clipped to the part ahead of the anchor.
//!
//! ## Conflict resolution
//!
//! Overlaps are resolved pointwise. The sweep keeps the zones covering
//! the current offset in an ordered set keyed by `(priority, rate)`; the
//! minimum entry wins, so a lower priority value overrides and equal
//! priorities prefer the slower rate. Offsets covered by no zone run at
//! the neutral ambient rate.
//!
//! The emitted segments tile the covered range and share endpoints.
//! Content is length based, so a shared endpoint never counts twice.

use crate::num::ResolveNumeric;
use capstan_core::math::interval::Interval;
use capstan_model::{anchor::AnchorMode, rate::Rate, zone::EfficiencyZone};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// A maximal run of offsets sharing one winning rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<T>
where
    T: ResolveNumeric,
{
    span: Interval<T>,
    rate: Rate<T>,
}

impl<T> Segment<T>
where
    T: ResolveNumeric,
{
    /// Creates a new `Segment`.
    #[inline]
    pub(crate) fn new(span: Interval<T>, rate: Rate<T>) -> Self {
        Self { span, rate }
    }

    /// Returns the offset span covered by this segment.
    #[inline]
    pub(crate) const fn span(&self) -> Interval<T> {
        self.span
    }

    /// Returns the rate in effect over this segment.
    #[inline]
    pub(crate) const fn rate(&self) -> Rate<T> {
        self.rate
    }
}

/// A conflict-free tiling of the covered offset range.
///
/// Most inputs carry a handful of zones, so segments live inline until
/// the tiling grows past eight entries.
pub(crate) type Timeline<T> = SmallVec<[Segment<T>; 8]>;

/// A zone projected into offset space and clipped to the walkable part.
#[derive(Debug, Clone, Copy)]
struct ClippedZone<T>
where
    T: ResolveNumeric,
{
    lo: T,
    hi: T,
    priority: i32,
    rate: Rate<T>,
}

/// Projects a zone window into anchor-offset space.
///
/// Offsets beyond the representable range saturate to the type bounds.
/// Such offsets are unreachable by the walk, so clamping them only trims
/// span the walk could never enter.
fn offset_span<T>(window: Interval<T>, anchor: T, mode: AnchorMode) -> (T, T)
where
    T: ResolveNumeric,
{
    match mode {
        AnchorMode::FixedStart => (
            window.min().saturating_sub_val(anchor),
            window.max().saturating_sub_val(anchor),
        ),
        AnchorMode::FixedEnd => (
            anchor.saturating_sub_val(window.max()),
            anchor.saturating_sub_val(window.min()),
        ),
    }
}

/// Returns the rate of the minimum active entry, or the neutral ambient
/// rate when no zone covers the current offset.
fn winning_rate<T>(active: &BTreeSet<(i32, Rate<T>, usize)>) -> Rate<T>
where
    T: ResolveNumeric,
{
    active
        .first()
        .map(|&(_, rate, _)| rate)
        .unwrap_or_else(Rate::neutral)
}

/// Appends a segment, extending the previous one when the rate carries over.
fn push_merged<T>(timeline: &mut Timeline<T>, segment: Segment<T>)
where
    T: ResolveNumeric,
{
    if let Some(last) = timeline.last_mut() {
        if last.rate == segment.rate {
            debug_assert!(last.span.max() == segment.span.min());
            last.span = Interval::new_unchecked(last.span.min(), segment.span.max());
            return;
        }
    }
    timeline.push(segment);
}

/// Builds the conflict-free timeline for the given zones.
///
/// The result tiles the offset range from zero to the furthest clipped
/// zone boundary; an empty slice (or one where every window falls behind
/// the anchor) yields an empty timeline. Offsets past the final segment
/// implicitly run at the ambient rate and are left to the caller.
pub(crate) fn build_timeline<T>(
    zones: &[EfficiencyZone<T>],
    anchor: T,
    mode: AnchorMode,
) -> Timeline<T>
where
    T: ResolveNumeric,
{
    let mut clipped: Vec<ClippedZone<T>> = Vec::with_capacity(zones.len());
    for zone in zones {
        let (lo, hi) = offset_span(zone.window(), anchor, mode);
        if hi <= T::ZERO {
            continue;
        }
        let lo = if lo < T::ZERO { T::ZERO } else { lo };
        if lo == hi {
            continue;
        }
        clipped.push(ClippedZone {
            lo,
            hi,
            priority: zone.priority(),
            rate: zone.rate(),
        });
    }

    // Boundary events, ends before starts at equal offsets so coverage
    // hands over exactly at the shared endpoint.
    let mut events: Vec<(T, bool, usize)> = Vec::with_capacity(clipped.len() * 2);
    for (index, zone) in clipped.iter().enumerate() {
        events.push((zone.lo, true, index));
        events.push((zone.hi, false, index));
    }
    events.sort_unstable();

    let mut timeline = Timeline::new();
    // The index disambiguates zones sharing priority and rate, so one
    // ending does not deactivate the other.
    let mut active: BTreeSet<(i32, Rate<T>, usize)> = BTreeSet::new();
    let mut cursor = T::ZERO;
    let mut next = 0;
    while next < events.len() {
        let at = events[next].0;
        if at > cursor {
            let span = Interval::new_unchecked(cursor, at);
            push_merged(&mut timeline, Segment::new(span, winning_rate(&active)));
            cursor = at;
        }
        while next < events.len() && events[next].0 == at {
            let (_, is_start, index) = events[next];
            let zone = &clipped[index];
            let key = (zone.priority, zone.rate, index);
            if is_start {
                active.insert(key);
            } else {
                active.remove(&key);
            }
            next += 1;
        }
    }
    debug_assert!(active.is_empty());

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(min: i64, max: i64) -> Interval<i64> {
        Interval::new(min, max)
    }

    fn zone(min: i64, max: i64, rate: i64) -> EfficiencyZone<i64> {
        EfficiencyZone::new(iv(min, max), Rate::new(rate))
    }

    fn segments(timeline: &Timeline<i64>) -> Vec<(i64, i64, i64)> {
        timeline
            .iter()
            .map(|s| (s.span().min(), s.span().max(), s.rate().value()))
            .collect()
    }

    #[test]
    fn test_no_zones_yield_an_empty_timeline() {
        let timeline = build_timeline::<i64>(&[], 0, AnchorMode::FixedStart);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_zone_ahead_of_the_anchor_gets_an_ambient_prefix() {
        let timeline = build_timeline(&[zone(5, 10, 50)], 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 5, 100), (5, 10, 50)]);
    }

    #[test]
    fn test_offsets_are_measured_from_the_anchor() {
        let timeline = build_timeline(&[zone(12, 15, 50)], 10, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 2, 100), (2, 5, 50)]);
    }

    #[test]
    fn test_zone_behind_the_anchor_is_dropped() {
        let timeline = build_timeline(&[zone(-5, 0, 50)], 0, AnchorMode::FixedStart);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_degenerate_window_is_dropped() {
        let timeline = build_timeline(&[zone(5, 5, 0)], 0, AnchorMode::FixedStart);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_straddling_zone_is_clipped_at_the_anchor() {
        let timeline = build_timeline(&[zone(-5, 5, 50)], 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 5, 50)]);
    }

    #[test]
    fn test_fixed_end_mirrors_windows_behind_the_anchor() {
        let timeline = build_timeline(&[zone(-10, -2, 50)], 0, AnchorMode::FixedEnd);
        assert_eq!(segments(&timeline), vec![(0, 2, 100), (2, 10, 50)]);
    }

    #[test]
    fn test_fixed_end_drops_windows_ahead_of_the_anchor() {
        let timeline = build_timeline(&[zone(2, 10, 50)], 0, AnchorMode::FixedEnd);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_lower_priority_value_wins_the_overlap() {
        let zones = [zone(0, 10, 200).with_priority(1), zone(3, 7, 50)];
        let timeline = build_timeline(&zones, 0, AnchorMode::FixedStart);
        assert_eq!(
            segments(&timeline),
            vec![(0, 3, 200), (3, 7, 50), (7, 10, 200)]
        );
    }

    #[test]
    fn test_equal_priorities_prefer_the_lower_rate() {
        let zones = [zone(0, 10, 50), zone(5, 15, 200)];
        let timeline = build_timeline(&zones, 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 10, 50), (10, 15, 200)]);
    }

    #[test]
    fn test_adjacent_spans_with_one_rate_merge() {
        let zones = [zone(0, 5, 50), zone(3, 10, 50).with_priority(1)];
        let timeline = build_timeline(&zones, 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 10, 50)]);
    }

    #[test]
    fn test_gaps_between_zones_run_at_the_ambient_rate() {
        let zones = [zone(2, 4, 50), zone(6, 8, 30)];
        let timeline = build_timeline(&zones, 0, AnchorMode::FixedStart);
        assert_eq!(
            segments(&timeline),
            vec![(0, 2, 100), (2, 4, 50), (4, 6, 100), (6, 8, 30)]
        );
    }

    #[test]
    fn test_explicit_neutral_zone_merges_with_ambient_coverage() {
        let timeline = build_timeline(&[zone(5, 10, 100)], 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 10, 100)]);
    }

    #[test]
    fn test_duplicate_zones_deactivate_independently() {
        let zones = [zone(0, 10, 50), zone(0, 5, 50)];
        let timeline = build_timeline(&zones, 0, AnchorMode::FixedStart);
        assert_eq!(segments(&timeline), vec![(0, 10, 50)]);
    }
}
