// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar and rectangle abstractions consumed by the bin.

use core::fmt::Debug;

/// Numeric scalar abstraction for world coordinates.
///
/// The bin only needs a handful of operations: computing cell extents from
/// the world size, offsetting a rectangle origin by its size, and mapping a
/// coordinate to a cell index.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Divide two scalar values: a / b.
    fn div(a: Self, b: Self) -> Self;

    /// Convert a cell count to the scalar type.
    fn from_usize(n: usize) -> Self;

    /// Whether the value is finite (not NaN and not infinite).
    fn is_finite(self) -> bool;

    /// Map a coordinate to a cell index along one axis.
    ///
    /// Rounds toward negative infinity and saturates at the `i32` range.
    /// Monotonic in `value` for a fixed `cell_size`.
    fn cell_coord(value: Self, cell_size: Self) -> i32;
}

impl Scalar for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Cell counts are far below the range where f32 loses integer precision."
    )]
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cell indices are intentionally i32; out-of-range values are saturated."
    )]
    #[inline]
    fn cell_coord(value: Self, cell_size: Self) -> i32 {
        debug_assert!(cell_size > 0.0, "cell size must be strictly positive (f32)");
        let t = value / cell_size;
        debug_assert!(!t.is_nan(), "cell coordinate must not be NaN (f32)");
        let coord = t as i32;

        // Round towards -inf (the cast above has already truncated).
        if t < 0.0 && (coord as Self) > t {
            coord.saturating_sub(1)
        } else {
            coord
        }
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn div(a: Self, b: Self) -> Self {
        a / b
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Cell counts are far below the range where f64 loses integer precision."
    )]
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cell indices are intentionally i32; out-of-range values are saturated."
    )]
    #[inline]
    fn cell_coord(value: Self, cell_size: Self) -> i32 {
        debug_assert!(cell_size > 0.0, "cell size must be strictly positive (f64)");
        let t = value / cell_size;
        debug_assert!(!t.is_nan(), "cell coordinate must not be NaN (f64)");
        let coord = t as i32;

        // Round towards -inf (the cast above has already truncated).
        if t < 0.0 && (coord as Self) > t {
            coord.saturating_sub(1)
        } else {
            coord
        }
    }
}

/// An axis-aligned rectangle the bin can index.
///
/// Implement this for the rectangle type of the host application. The bin
/// reads the origin and size to place the rectangle into cells, and uses
/// [`contains_point`][Self::contains_point] to answer point queries.
/// Rectangle/rectangle intersection is decided by a
/// [`CollidePolicy`][crate::CollidePolicy] instead, so the same rectangle
/// type can be indexed under different edge semantics.
pub trait Rectangle {
    /// Coordinate type.
    type Scalar: Scalar;

    /// Left edge.
    fn x(&self) -> Self::Scalar;

    /// Top edge.
    fn y(&self) -> Self::Scalar;

    /// Horizontal extent.
    fn width(&self) -> Self::Scalar;

    /// Vertical extent.
    fn height(&self) -> Self::Scalar;

    /// Whether the point lies inside this rectangle.
    fn contains_point(&self, x: Self::Scalar, y: Self::Scalar) -> bool;
}

/// Rectangle described by its top-left corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rect<T> {
    /// Create a rectangle from origin and size.
    #[inline(always)]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> T {
        T::add(self.x, self.width)
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> T {
        T::add(self.y, self.height)
    }

    /// Whether the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge or at a corner do not
    /// intercept each other.
    ///
    /// ```
    /// use bin_partition::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.intercepts(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    /// assert!(!a.intercepts(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    /// ```
    #[inline]
    pub fn intercepts(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the two rectangles overlap, counting shared edges as overlap.
    ///
    /// ```
    /// use bin_partition::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    /// assert!(!a.overlaps(&Rect::new(11.0, 0.0, 10.0, 10.0)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Whether the point lies inside the half-open area
    /// `[x, x + width) x [y, y + height)`.
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }
}

impl<T: Scalar> Rectangle for Rect<T> {
    type Scalar = T;

    #[inline(always)]
    fn x(&self) -> T {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> T {
        self.y
    }

    #[inline(always)]
    fn width(&self) -> T {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> T {
        self.height
    }

    #[inline]
    fn contains_point(&self, x: T, y: T) -> bool {
        Self::contains_point(self, x, y)
    }
}

/// `kurbo` rectangles are stored as corners; width and height are derived.
#[cfg(feature = "kurbo")]
impl Rectangle for kurbo::Rect {
    type Scalar = f64;

    #[inline]
    fn x(&self) -> f64 {
        self.x0.min(self.x1)
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y0.min(self.y1)
    }

    #[inline]
    fn width(&self) -> f64 {
        Self::width(self).abs()
    }

    #[inline]
    fn height(&self) -> f64 {
        Self::height(self).abs()
    }

    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.abs().contains(kurbo::Point::new(x, y))
    }
}
