// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by bin construction and insertion.

use thiserror::Error;

/// Errors reported by [`Bin`][crate::Bin] and [`BinConfig`][crate::BinConfig].
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinError {
    /// The object is already tracked; delete it before inserting it again.
    #[error("object is already in the bin; remove it before inserting again")]
    AlreadyInserted,

    /// The grid must have at least one column.
    #[error("bin needs at least one column")]
    ZeroColumns,

    /// The grid must have at least one row.
    #[error("bin needs at least one row")]
    ZeroRows,

    /// The grid has more cells than can be addressed: either dimension
    /// exceeds `i32::MAX` or `columns * rows` overflows `usize`.
    #[error("bin has too many cells to address")]
    TooManyCells,

    /// The world width is zero, negative, or not finite.
    #[error("world width must be positive and finite")]
    InvalidWorldWidth,

    /// The world height is zero, negative, or not finite.
    #[error("world height must be positive and finite")]
    InvalidWorldHeight,
}
