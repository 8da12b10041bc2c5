// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-size uniform grid.
//!
//! Every tracked object is stored once in each cell its rectangle's
//! [`CellRange`] covers. Queries scan the cells covering the query primitive,
//! then test the stored rectangle exactly, reporting each object at most once.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::hash::Hash;
use core::ops::Range;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::collide::{CollidePolicy, Exclusive};
use crate::config::BinConfig;
use crate::error::BinError;
use crate::types::{Rectangle, Scalar};

type Cell<H> = SmallVec<[H; 4]>;

/// Half-open column and row index ranges covered by a rectangle or point.
///
/// The range is conservative: the end index is one past the cell holding
/// the far edge, so a rectangle ending exactly on a cell boundary also
/// covers the following cell. Queries filter those candidates with the
/// exact geometric test. Indices are clamped to the grid, so primitives
/// outside the world yield an empty range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRange {
    /// Column indices.
    pub columns: Range<usize>,
    /// Row indices.
    pub rows: Range<usize>,
}

impl CellRange {
    /// Whether the range covers no cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    /// Iterate `(column, row)` pairs, column-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let rows = self.rows.clone();
        self.columns
            .clone()
            .flat_map(move |c| rows.clone().map(move |r| (c, r)))
    }
}

/// Clamp a signed cell coordinate into `0..=count`.
fn clamp_index(coord: i32, count: usize) -> usize {
    usize::try_from(coord).map_or(0, |i| i.min(count))
}

fn axis_range<T: Scalar>(lo: T, hi: T, cell: T, count: usize) -> Range<usize> {
    let start = clamp_index(T::cell_coord(lo, cell), count);
    let end = clamp_index(T::cell_coord(hi, cell).saturating_add(1), count);
    start.min(end)..end
}

/// A uniform grid ("bin") over a bounded world.
///
/// - `H` is the caller's object handle. It is cloned into every cell the
///   object covers and used as the key of the reverse index.
/// - `R` is the rectangle type, see [`Rectangle`].
/// - `C` is the [`CollidePolicy`] used by region queries.
///
/// The bin is not internally synchronized. Mutations take `&mut self`.
///
/// # Example
///
/// ```
/// use bin_partition::{Bin, Rect};
///
/// let mut bin = Bin::new(5, 5, 600.0, 600.0).unwrap();
/// bin.insert(Rect::new(22.0, 34.0, 300.0, 300.0), "ship").unwrap();
/// bin.insert(Rect::new(511.0, 300.0, 400.0, 400.0), "rock").unwrap();
///
/// let hits = bin.query(&Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(*hits[0].0, "ship");
///
/// let hits = bin.query_point(550.0, 550.0);
/// assert_eq!(*hits[0].0, "rock");
/// ```
pub struct Bin<H, R: Rectangle, C = Exclusive> {
    config: BinConfig<R::Scalar>,
    cell_width: R::Scalar,
    cell_height: R::Scalar,
    // Column-major: cell (c, r) lives at `c * rows + r`.
    cells: Vec<Cell<H>>,
    rects: HashMap<H, R>,
    policy: C,
}

impl<H, R: Rectangle, C: Debug> Debug for Bin<H, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.cells.iter().filter(|c| !c.is_empty()).count();
        f.debug_struct("Bin")
            .field("columns", &self.config.columns)
            .field("rows", &self.config.rows)
            .field("world_width", &self.config.world_width)
            .field("world_height", &self.config.world_height)
            .field("tracked", &self.rects.len())
            .field("occupied_cells", &occupied)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<H, R: Rectangle> Bin<H, R, Exclusive> {
    /// Create a bin with `columns x rows` cells covering a
    /// `world_width x world_height` world, using [`Exclusive`] intersection.
    pub fn new(
        columns: usize,
        rows: usize,
        world_width: R::Scalar,
        world_height: R::Scalar,
    ) -> Result<Self, BinError> {
        Self::from_config(BinConfig::new(columns, rows, world_width, world_height))
    }

    /// Create a bin from a configuration, using [`Exclusive`] intersection.
    pub fn from_config(config: BinConfig<R::Scalar>) -> Result<Self, BinError> {
        Self::from_config_with_policy(config, Exclusive)
    }
}

impl<H, R: Rectangle, C> Bin<H, R, C> {
    /// Create a bin with an explicit collision policy.
    pub fn with_policy(
        columns: usize,
        rows: usize,
        world_width: R::Scalar,
        world_height: R::Scalar,
        policy: C,
    ) -> Result<Self, BinError> {
        Self::from_config_with_policy(
            BinConfig::new(columns, rows, world_width, world_height),
            policy,
        )
    }

    /// Create a bin from a configuration and an explicit collision policy.
    pub fn from_config_with_policy(
        config: BinConfig<R::Scalar>,
        policy: C,
    ) -> Result<Self, BinError> {
        config.validate()?;
        let count = config.cell_count();
        let mut cells = Vec::with_capacity(count);
        cells.resize_with(count, Cell::new);
        debug!(
            columns = config.columns,
            rows = config.rows,
            world_width = ?config.world_width,
            world_height = ?config.world_height,
            "created bin"
        );
        Ok(Self {
            cell_width: config.cell_width(),
            cell_height: config.cell_height(),
            config,
            cells,
            rects: HashMap::new(),
            policy,
        })
    }

    /// The geometry this bin was built with.
    pub const fn config(&self) -> &BinConfig<R::Scalar> {
        &self.config
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        self.config.columns
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.config.rows
    }

    /// World extent along x.
    pub fn world_width(&self) -> R::Scalar {
        self.config.world_width
    }

    /// World extent along y.
    pub fn world_height(&self) -> R::Scalar {
        self.config.world_height
    }

    /// Width of one cell.
    pub fn cell_width(&self) -> R::Scalar {
        self.cell_width
    }

    /// Height of one cell.
    pub fn cell_height(&self) -> R::Scalar {
        self.cell_height
    }

    /// The collision policy used by [`query`][Self::query].
    pub const fn policy(&self) -> &C {
        &self.policy
    }

    /// Number of tracked objects, including those placed outside the world.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no object is tracked.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Iterate the tracked objects with their stored rectangles.
    pub fn tracked(&self) -> impl Iterator<Item = (&H, &R)> + '_ {
        self.rects.iter()
    }

    /// Cells covered by a rectangle.
    pub fn cell_range(&self, rect: &R) -> CellRange {
        let x = rect.x();
        let y = rect.y();
        CellRange {
            columns: axis_range(
                x,
                R::Scalar::add(x, rect.width()),
                self.cell_width,
                self.config.columns,
            ),
            rows: axis_range(
                y,
                R::Scalar::add(y, rect.height()),
                self.cell_height,
                self.config.rows,
            ),
        }
    }

    /// The single cell covering a point, or an empty range outside the world.
    pub fn point_cell_range(&self, x: R::Scalar, y: R::Scalar) -> CellRange {
        CellRange {
            columns: axis_range(x, x, self.cell_width, self.config.columns),
            rows: axis_range(y, y, self.cell_height, self.config.rows),
        }
    }

    /// Handles stored in cell `(column, row)`, or `None` outside the grid.
    pub fn cell(&self, column: usize, row: usize) -> Option<&[H]> {
        if column >= self.config.columns || row >= self.config.rows {
            return None;
        }
        Some(self.cells[self.cell_index(column, row)].as_slice())
    }

    /// Iterate every cell as `((column, row), handles)`, column-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &[H])> + '_ {
        let rows = self.config.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / rows, i % rows), cell.as_slice()))
    }

    /// Display adapter printing cell contents row by row.
    pub fn dump(&self) -> CellDump<'_, H, R, C> {
        CellDump(self)
    }

    /// Drop every object, keeping the grid geometry.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.rects.clear();
        debug!("cleared bin");
    }

    #[inline]
    fn cell_index(&self, column: usize, row: usize) -> usize {
        column * self.config.rows + row
    }
}

impl<H, R, C> Bin<H, R, C>
where
    H: Clone + Eq + Hash,
    R: Rectangle,
    C: CollidePolicy<R>,
{
    /// Insert `handle` with bounding rectangle `rect`.
    ///
    /// Fails with [`BinError::AlreadyInserted`] if `handle` is already tracked;
    /// the bin is left unchanged in that case. Rectangles outside the world
    /// are accepted: the object is tracked but lives in no cell.
    pub fn insert(&mut self, rect: R, handle: H) -> Result<(), BinError> {
        if self.rects.contains_key(&handle) {
            debug!("rejected insert of an object already in the bin");
            return Err(BinError::AlreadyInserted);
        }
        self.place(rect, handle);
        Ok(())
    }

    fn place(&mut self, rect: R, handle: H) {
        let range = self.cell_range(&rect);
        if range.is_empty() {
            debug!(
                x = ?rect.x(),
                y = ?rect.y(),
                "object lies outside the world and occupies no cell"
            );
        } else {
            trace!(columns = ?range.columns, rows = ?range.rows, "insert");
        }
        for (column, row) in range.iter() {
            let idx = self.cell_index(column, row);
            self.cells[idx].push(handle.clone());
        }
        self.rects.insert(handle, rect);
    }

    /// Remove `handle` from the bin, scanning every cell.
    ///
    /// Returns the stored rectangle, or `None` if the handle was not tracked.
    /// Prefer [`delete_with_rect`][Self::delete_with_rect] when the rectangle
    /// is known; this form is linear in the number of cells.
    pub fn delete(&mut self, handle: &H) -> Option<R> {
        let removed = self.rects.remove(handle);
        for cell in &mut self.cells {
            cell.retain(|h| *h != *handle);
        }
        trace!(tracked = removed.is_some(), "delete");
        removed
    }

    /// Remove `handle` from the cells covered by `rect` only.
    ///
    /// The reverse index is left untouched.
    pub fn delete_with_rect(&mut self, handle: &H, rect: &R) {
        let range = self.cell_range(rect);
        trace!(columns = ?range.columns, rows = ?range.rows, "delete with rect");
        for (column, row) in range.iter() {
            let idx = self.cell_index(column, row);
            self.cells[idx].retain(|h| *h != *handle);
        }
    }

    /// Move `handle` from `old_rect` to `new_rect`.
    ///
    /// `old_rect` must be the rectangle the handle was inserted with. Any
    /// cell it does not cover keeps a stale entry for the handle. Never fails:
    /// the handle is dropped from the reverse index before it is re-inserted.
    pub fn move_object(&mut self, handle: H, old_rect: &R, new_rect: R) {
        self.delete_with_rect(&handle, old_rect);
        self.rects.remove(&handle);
        self.place(new_rect, handle);
    }

    /// Call `f` for each object whose stored rectangle collides with `rect`
    /// under this bin's policy. Each object is visited at most once.
    pub fn visit_rect<'a, F: FnMut(&'a H, &'a R)>(&'a self, rect: &R, mut f: F) {
        let range = self.cell_range(rect);
        let mut seen: HashSet<&H> = HashSet::new();
        for (column, row) in range.iter() {
            for handle in &self.cells[self.cell_index(column, row)] {
                if !seen.insert(handle) {
                    continue;
                }
                // Cells only hold tracked handles.
                let Some((key, stored)) = self.rects.get_key_value(handle) else {
                    continue;
                };
                if self.policy.collide(rect, stored) {
                    f(key, stored);
                }
            }
        }
    }

    /// Call `f` for each object whose stored rectangle contains the point.
    /// Each object is visited at most once.
    pub fn visit_point<'a, F: FnMut(&'a H, &'a R)>(
        &'a self,
        x: R::Scalar,
        y: R::Scalar,
        mut f: F,
    ) {
        let range = self.point_cell_range(x, y);
        let mut seen: HashSet<&H> = HashSet::new();
        for (column, row) in range.iter() {
            for handle in &self.cells[self.cell_index(column, row)] {
                if !seen.insert(handle) {
                    continue;
                }
                let Some((key, stored)) = self.rects.get_key_value(handle) else {
                    continue;
                };
                if stored.contains_point(x, y) {
                    f(key, stored);
                }
            }
        }
    }

    /// Objects whose stored rectangle collides with `rect`, in the order they
    /// are first found.
    #[must_use]
    pub fn query(&self, rect: &R) -> Vec<(&H, &R)> {
        let mut out = Vec::new();
        self.visit_rect(rect, |h, r| out.push((h, r)));
        out
    }

    /// Objects whose stored rectangle contains the point.
    #[must_use]
    pub fn query_point(&self, x: R::Scalar, y: R::Scalar) -> Vec<(&H, &R)> {
        let mut out = Vec::new();
        self.visit_point(x, y, |h, r| out.push((h, r)));
        out
    }

    /// Every distinct handle stored in at least one cell.
    ///
    /// Objects tracked with a rectangle outside the world occupy no cell and
    /// are not reported here; see [`tracked`][Self::tracked] and
    /// [`contains`][Self::contains].
    #[must_use]
    pub fn all_objects(&self) -> Vec<&H> {
        let mut seen: HashSet<&H> = HashSet::new();
        let mut out = Vec::new();
        for handle in self.cells.iter().flatten() {
            if seen.insert(handle) {
                out.push(handle);
            }
        }
        out
    }

    /// Whether `handle` is tracked.
    pub fn contains(&self, handle: &H) -> bool {
        self.rects.contains_key(handle)
    }

    /// The rectangle `handle` was last inserted with.
    pub fn get(&self, handle: &H) -> Option<&R> {
        self.rects.get(handle)
    }
}

/// Prints a [`Bin`]'s cells, one grid row per line.
///
/// Created by [`Bin::dump`].
pub struct CellDump<'a, H, R: Rectangle, C>(&'a Bin<H, R, C>);

impl<H, R: Rectangle, C: Debug> Debug for CellDump<'_, H, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellDump").field(self.0).finish()
    }
}

impl<H: Debug, R: Rectangle, C> Display for CellDump<'_, H, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bin = self.0;
        for row in 0..bin.config.rows {
            for column in 0..bin.config.columns {
                let cell = &bin.cells[bin.cell_index(column, row)];
                write!(f, "{:?} ", cell.as_slice())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
