// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bin Partition: a fixed-size uniform grid for 2D rectangle and point queries.
//!
//! A [`Bin`] overlays a bounded world with `columns x rows` equally sized
//! cells. Every object is stored, by handle, in each cell its bounding
//! rectangle covers, and the bin remembers the rectangle each handle was
//! inserted with. Queries first gather candidates from the cells covering the
//! query primitive, then test each candidate's stored rectangle exactly, so an
//! object spanning many cells is still reported once.
//!
//! - Insert, delete, and move objects identified by any `Clone + Eq + Hash`
//!   handle.
//! - Query by rectangle (with a pluggable [`CollidePolicy`]) or by point.
//! - Bring your own rectangle type by implementing [`Rectangle`], or use the
//!   provided [`Rect`].
//!
//! The grid never grows: objects outside `[0, world_width) x [0, world_height)`
//! are tracked but occupy no cell, and so are invisible to queries.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in dependencies.
//! - `libm`: `no_std` math for the `kurbo` adapter.
//! - `kurbo`: implements [`Rectangle`] for `kurbo::Rect`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`BinConfig`] and [`Rect`].
//!
//! # Example
//!
//! ```rust
//! use bin_partition::{Bin, BinError, Rect};
//!
//! let mut bin = Bin::new(5, 5, 600.0, 600.0)?;
//! let player = Rect::new(22.0, 34.0, 32.0, 32.0);
//! bin.insert(player, 1_u32)?;
//!
//! // Inserting the same handle twice is an error.
//! assert_eq!(bin.insert(player, 1), Err(BinError::AlreadyInserted));
//!
//! // Move it and query around the new position.
//! let moved = Rect::new(300.0, 300.0, 32.0, 32.0);
//! bin.move_object(1, &player, moved);
//! assert!(bin.query(&player).is_empty());
//! assert_eq!(bin.query_point(310.0, 310.0), vec![(&1, &moved)]);
//! # Ok::<(), BinError>(())
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in rectangle coordinates. Construction rejects
//! non-finite world extents.

#![no_std]

extern crate alloc;

mod bin;
mod collide;
mod config;
mod error;
mod types;

pub use bin::{Bin, CellDump, CellRange};
pub use collide::{CollideFn, CollidePolicy, Exclusive, Inclusive};
pub use config::BinConfig;
pub use error::BinError;
pub use types::{Rect, Rectangle, Scalar};
