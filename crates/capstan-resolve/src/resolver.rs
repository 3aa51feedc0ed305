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

//! # Efficiency Resolution
//!
//! The work-accumulation walk behind [`resolve_with_efficiencies`].
//!
//! ## Work accounting
//!
//! Work is tracked in percent-scaled integer units: a target of duration
//! `d` requires `d * 100` units, and a stretch of length `l` walked at
//! rate `r` supplies `l * r` of them. Whole-stretch arithmetic is
//! therefore exact. Only a stretch left partway can fall between two
//! instants, in which case the moving endpoint rounds away from the
//! anchor so the returned interval always covers the full work amount.
//!
//! ## Termination
//!
//! The resolved timeline is finite and every offset past it runs at the
//! ambient rate, so the walk crosses at most one stretch per zone
//! boundary and then finishes in the terminal gap. Zero-rate stretches
//! consume wall-clock time without progress, but they are finite and
//! crossed whole.

use crate::{
    error::{InvalidIntervalError, InvalidRateError, ResolveError},
    num::ResolveNumeric,
    timeline::{Segment, build_timeline},
};
use capstan_core::math::interval::Interval;
use capstan_model::{anchor::AnchorMode, zone::EfficiencyZone};

/// Checks the target and every zone before any resolution work starts.
///
/// The checked constructors already reject these shapes; this guards
/// values built through the unchecked constructors in release builds,
/// reporting the first violation in slice order.
fn validate<T>(target: Interval<T>, zones: &[EfficiencyZone<T>]) -> Result<(), ResolveError>
where
    T: ResolveNumeric,
{
    if target.min() > target.max() {
        return Err(InvalidIntervalError { zone: None }.into());
    }
    for (index, zone) in zones.iter().enumerate() {
        if zone.min() > zone.max() {
            return Err(InvalidIntervalError { zone: Some(index) }.into());
        }
        if zone.rate().value() < T::ZERO {
            return Err(InvalidRateError { zone: index }.into());
        }
    }
    Ok(())
}

/// Returns the wall-clock length needed to collect `remaining`
/// percent-scaled work units at `rate`, rounded up to a whole instant.
#[inline]
fn needed_length<T>(remaining: T, rate: T) -> T
where
    T: ResolveNumeric,
{
    let whole = remaining / rate;
    if remaining % rate == T::ZERO {
        whole
    } else {
        whole + T::PLUS_ONE
    }
}

/// Moves an offset cursor forward, panicking when it leaves the
/// representable range of `T`.
#[inline]
fn advance<T>(cursor: T, length: T) -> T
where
    T: ResolveNumeric,
{
    cursor.checked_add_val(length).unwrap_or_else(|| {
        panic!(
            "resolved offset overflows the instant type: the cursor is {} and the required length is {}",
            cursor, length
        )
    })
}

/// Walks the timeline away from the anchor and returns the offset at
/// which `work` percent-scaled units have been collected.
///
/// Offsets past the final segment run at the ambient rate, so the walk
/// always terminates. A stretch starting exactly where the work runs out
/// is never entered.
fn walk_offset<T>(segments: &[Segment<T>], work: T) -> T
where
    T: ResolveNumeric,
{
    let mut remaining = work;
    if remaining == T::ZERO {
        return T::ZERO;
    }

    let mut cursor = T::ZERO;
    for segment in segments {
        debug_assert!(
            segment.span().min() == cursor,
            "timeline must tile the walked range without gaps"
        );

        let rate = segment.rate().value();
        if rate == T::ZERO {
            // No work accrues here; the whole stretch passes on the clock.
            cursor = segment.span().max();
            continue;
        }

        // Saturation only clamps capacities that already exceed any
        // representable remainder, so the comparison below stays exact.
        let obtainable = segment.span().duration().saturating_mul_val(rate);
        if obtainable < remaining {
            remaining = remaining - obtainable;
            cursor = segment.span().max();
            continue;
        }

        let length = needed_length(remaining, rate);
        debug_assert!(length <= segment.span().duration());
        return advance(cursor, length);
    }

    advance(cursor, needed_length(remaining, T::HUNDRED))
}

/// Computes the wall-clock interval a piece of work occupies when
/// efficiency varies over time.
///
/// The duration of `target` is the work amount, measured as the span the
/// work would occupy at the neutral rate of 100%. The zones are collapsed
/// into a conflict-free timeline and walked away from the anchored
/// endpoint, trading wall-clock time for work at each stretch's rate
/// until the amount is covered. The returned interval keeps the anchored
/// endpoint and moves the opposite one to the instant where the work runs
/// out.
///
/// Where zones overlap, the numerically lower priority wins, and among
/// zones of equal priority the slower rate wins. Offsets covered by no
/// zone run at the neutral rate, including everything past the last zone.
/// Zones on the far side of the anchor are never reached, and a zone
/// starting exactly where the work runs out is never entered.
///
/// When the work runs out partway through an instant, the moving endpoint
/// rounds away from the anchor, so the returned interval always covers
/// the full work amount.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidInterval`] when the target or a zone
/// window is inverted, and [`ResolveError::InvalidRate`] when a zone
/// carries a negative rate. The checked constructors make such values
/// unrepresentable; the validation guards inputs built through the
/// unchecked constructors in release builds.
///
/// # Panics
///
/// Panics when the target duration cannot be tracked at percent scale,
/// or when the moving endpoint leaves the representable range of `T`.
///
/// # Examples
///
/// ```rust
/// use capstan_core::math::interval::Interval;
/// use capstan_model::{anchor::AnchorMode, rate::Rate, zone::EfficiencyZone};
/// use capstan_resolve::resolver::resolve_with_efficiencies;
///
/// // One hour of work; the first half runs at 20%, the second at 150%.
/// let target = Interval::new(0i64, 60);
/// let zones = [
///     EfficiencyZone::new(Interval::new(0, 30), Rate::new(20)),
///     EfficiencyZone::new(Interval::new(30, 60), Rate::new(150)),
/// ];
///
/// let resolved = resolve_with_efficiencies(target, &zones, AnchorMode::FixedStart)?;
/// assert_eq!(resolved, Interval::new(0, 69));
/// # Ok::<(), capstan_resolve::error::ResolveError>(())
/// ```
///
/// Anchoring the end instead walks backward from it:
///
/// ```rust
/// use capstan_core::math::interval::Interval;
/// use capstan_model::{anchor::AnchorMode, rate::Rate, zone::EfficiencyZone};
/// use capstan_resolve::resolver::resolve_with_efficiencies;
///
/// let target = Interval::new(0i64, 24);
/// let zones = [EfficiencyZone::new(Interval::new(0, 24), Rate::zero())];
///
/// let resolved = resolve_with_efficiencies(target, &zones, AnchorMode::FixedEnd)?;
/// assert_eq!(resolved, Interval::new(-24, 24));
/// # Ok::<(), capstan_resolve::error::ResolveError>(())
/// ```
pub fn resolve_with_efficiencies<T>(
    target: Interval<T>,
    zones: &[EfficiencyZone<T>],
    mode: AnchorMode,
) -> Result<Interval<T>, ResolveError>
where
    T: ResolveNumeric,
{
    validate(target, zones)?;

    let anchor = if mode.is_forward() {
        target.min()
    } else {
        target.max()
    };
    let work = target.duration().checked_mul_val(T::HUNDRED).unwrap_or_else(|| {
        panic!(
            "called `resolve_with_efficiencies` with a target duration that overflows at percent scale: the duration is {}",
            target.duration()
        )
    });

    let timeline = build_timeline(zones, anchor, mode);
    let offset = walk_offset(&timeline, work);

    let resolved = match mode {
        AnchorMode::FixedStart => {
            let max = anchor.checked_add_val(offset).unwrap_or_else(|| {
                panic!(
                    "resolved endpoint overflows the instant type: the anchor is {} and the walked offset is {}",
                    anchor, offset
                )
            });
            Interval::new_unchecked(anchor, max)
        }
        AnchorMode::FixedEnd => {
            let min = anchor.checked_sub_val(offset).unwrap_or_else(|| {
                panic!(
                    "resolved endpoint overflows the instant type: the anchor is {} and the walked offset is {}",
                    anchor, offset
                )
            });
            Interval::new_unchecked(min, anchor)
        }
    };
    Ok(resolved)
}
