// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry parameters.

use crate::error::BinError;
use crate::types::Scalar;

/// Geometry of a [`Bin`][crate::Bin]: cell counts and world extent.
///
/// The world spans `[0, world_width) x [0, world_height)` and is divided into
/// `columns x rows` equally sized cells. With the `serde` feature this can be
/// loaded from level or scene files.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinConfig<T> {
    /// Number of cells along x.
    pub columns: usize,
    /// Number of cells along y.
    pub rows: usize,
    /// World extent along x.
    pub world_width: T,
    /// World extent along y.
    pub world_height: T,
}

impl<T: Scalar> BinConfig<T> {
    /// Create a configuration. Use [`validate`][Self::validate] or
    /// [`Bin::from_config`][crate::Bin::from_config] to check it.
    pub const fn new(columns: usize, rows: usize, world_width: T, world_height: T) -> Self {
        Self {
            columns,
            rows,
            world_width,
            world_height,
        }
    }

    /// Check that every dimension is strictly positive and finite.
    pub fn validate(&self) -> Result<(), BinError> {
        if self.columns == 0 {
            return Err(BinError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(BinError::ZeroRows);
        }
        // Cell coordinates saturate at `i32::MAX`; cells beyond it are unreachable.
        if i32::try_from(self.columns).is_err()
            || i32::try_from(self.rows).is_err()
            || self.columns.checked_mul(self.rows).is_none()
        {
            return Err(BinError::TooManyCells);
        }
        if !valid_extent(self.world_width) {
            return Err(BinError::InvalidWorldWidth);
        }
        if !valid_extent(self.world_height) {
            return Err(BinError::InvalidWorldHeight);
        }
        Ok(())
    }

    /// Total number of cells. Only meaningful once [`validate`][Self::validate]
    /// has succeeded.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Width of a single cell.
    #[inline]
    pub fn cell_width(&self) -> T {
        T::div(self.world_width, T::from_usize(self.columns))
    }

    /// Height of a single cell.
    #[inline]
    pub fn cell_height(&self) -> T {
        T::div(self.world_height, T::from_usize(self.rows))
    }
}

// NaN fails the comparison, so it is rejected here too.
fn valid_extent<T: Scalar>(v: T) -> bool {
    v > T::zero() && v.is_finite()
}
