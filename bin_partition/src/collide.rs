// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle intersection policies used by region queries.
//!
//! A [`Bin`][crate::Bin] only uses its cells to find *candidates*; the final
//! decision whether a stored rectangle matches a query rectangle is made by
//! a [`CollidePolicy`]. The policy is a per-bin type parameter, chosen at
//! construction.

use core::fmt::Debug;

use crate::types::{Rectangle, Scalar};

/// Decides whether two rectangles intersect.
pub trait CollidePolicy<R: ?Sized> {
    /// Whether `query` and `stored` intersect.
    fn collide(&self, query: &R, stored: &R) -> bool;
}

/// Intersection that requires shared interior area.
///
/// Rectangles touching only along an edge do not collide. This is the
/// default policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusive;

/// Intersection that also counts shared edges and corners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Inclusive;

/// Adapts a closure into a [`CollidePolicy`].
///
/// Useful for deferring to a host rectangle type's own intersection test:
///
/// ```
/// use bin_partition::{Bin, CollideFn, Rect};
///
/// let policy = CollideFn(|a: &Rect<f32>, b: &Rect<f32>| a.overlaps(b));
/// let bin: Bin<u32, Rect<f32>, _> =
///     Bin::with_policy(4, 4, 100.0, 100.0, policy).unwrap();
/// assert!(bin.is_empty());
/// ```
#[derive(Copy, Clone, Default)]
pub struct CollideFn<F>(pub F);

impl<F> Debug for CollideFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CollideFn").finish_non_exhaustive()
    }
}

impl<R: Rectangle + ?Sized> CollidePolicy<R> for Exclusive {
    #[inline]
    fn collide(&self, query: &R, stored: &R) -> bool {
        let (qx0, qy0, qx1, qy1) = corners(query);
        let (sx0, sy0, sx1, sy1) = corners(stored);
        qx0 < sx1 && sx0 < qx1 && qy0 < sy1 && sy0 < qy1
    }
}

impl<R: Rectangle + ?Sized> CollidePolicy<R> for Inclusive {
    #[inline]
    fn collide(&self, query: &R, stored: &R) -> bool {
        let (qx0, qy0, qx1, qy1) = corners(query);
        let (sx0, sy0, sx1, sy1) = corners(stored);
        qx0 <= sx1 && sx0 <= qx1 && qy0 <= sy1 && sy0 <= qy1
    }
}

impl<R: ?Sized, F: Fn(&R, &R) -> bool> CollidePolicy<R> for CollideFn<F> {
    #[inline]
    fn collide(&self, query: &R, stored: &R) -> bool {
        (self.0)(query, stored)
    }
}

#[inline]
fn corners<R: Rectangle + ?Sized>(r: &R) -> (R::Scalar, R::Scalar, R::Scalar, R::Scalar) {
    let x = r.x();
    let y = r.y();
    (
        x,
        y,
        R::Scalar::add(x, r.width()),
        R::Scalar::add(y, r.height()),
    )
}
