// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests comparing the bin against a brute-force scan.

use bin_partition::{Bin, CollidePolicy, Exclusive, Rect, Rectangle};
use proptest::prelude::*;

const WORLD: f64 = 600.0;

fn inside_rect() -> impl Strategy<Value = Rect<f64>> {
    (0.0..550.0_f64, 0.0..550.0_f64, 1.0..50.0_f64, 1.0..50.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn any_rect() -> impl Strategy<Value = Rect<f64>> {
    (
        -800.0..1400.0_f64,
        -800.0..1400.0_f64,
        0.0..400.0_f64,
        0.0..400.0_f64,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn grid_dims() -> impl Strategy<Value = (usize, usize)> {
    (1_usize..12, 1_usize..12)
}

fn sorted_handles<'a>(hits: impl IntoIterator<Item = (&'a u32, &'a Rect<f64>)>) -> Vec<u32> {
    let mut v: Vec<u32> = hits.into_iter().map(|(h, _)| *h).collect();
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn inserted_rect_is_found_by_its_own_query(
        (columns, rows) in grid_dims(),
        rect in inside_rect(),
    ) {
        let mut bin = Bin::new(columns, rows, WORLD, WORLD).unwrap();
        bin.insert(rect, 1_u32).unwrap();
        prop_assert_eq!(bin.query(&rect), vec![(&1, &rect)]);
    }

    #[test]
    fn query_matches_brute_force_inside_world(
        (columns, rows) in grid_dims(),
        rects in prop::collection::vec(inside_rect(), 0..40),
        query in any_rect(),
    ) {
        let mut bin = Bin::new(columns, rows, WORLD, WORLD).unwrap();
        for (i, r) in rects.iter().enumerate() {
            bin.insert(*r, u32::try_from(i).unwrap()).unwrap();
        }
        let expected: Vec<u32> = rects
            .iter()
            .enumerate()
            .filter(|(_, r)| Exclusive.collide(&query, *r))
            .map(|(i, _)| u32::try_from(i).unwrap())
            .collect();
        // Each hit is reported once, so the sorted list has no repeats.
        prop_assert_eq!(sorted_handles(bin.query(&query)), expected);
    }

    #[test]
    fn point_query_matches_brute_force(
        (columns, rows) in grid_dims(),
        rects in prop::collection::vec(any_rect(), 0..40),
        x in -100.0..700.0_f64,
        y in -100.0..700.0_f64,
    ) {
        let mut bin = Bin::new(columns, rows, WORLD, WORLD).unwrap();
        for (i, r) in rects.iter().enumerate() {
            bin.insert(*r, u32::try_from(i).unwrap()).unwrap();
        }
        let in_world = (0.0..WORLD).contains(&x) && (0.0..WORLD).contains(&y);
        let expected: Vec<u32> = if in_world {
            rects
                .iter()
                .enumerate()
                .filter(|(_, r)| Rectangle::contains_point(*r, x, y))
                .map(|(i, _)| u32::try_from(i).unwrap())
                .collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(sorted_handles(bin.query_point(x, y)), expected);
    }

    #[test]
    fn all_objects_lists_each_handle_once(
        (columns, rows) in grid_dims(),
        rects in prop::collection::vec(inside_rect(), 0..40),
    ) {
        let mut bin = Bin::new(columns, rows, WORLD, WORLD).unwrap();
        for (i, r) in rects.iter().enumerate() {
            bin.insert(*r, u32::try_from(i).unwrap()).unwrap();
        }
        let mut all: Vec<u32> = bin.all_objects().into_iter().copied().collect();
        all.sort_unstable();
        let expected: Vec<u32> = (0..rects.len()).map(|i| u32::try_from(i).unwrap()).collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn move_then_delete_leaves_no_trace(
        (columns, rows) in grid_dims(),
        from in any_rect(),
        to in any_rect(),
    ) {
        let mut bin = Bin::new(columns, rows, WORLD, WORLD).unwrap();
        bin.insert(from, 5_u32).unwrap();
        bin.move_object(5, &from, to);
        prop_assert_eq!(bin.get(&5), Some(&to));
        // Only cells covered by `to` may hold the handle.
        let range = bin.cell_range(&to);
        for ((c, r), cell) in bin.cells() {
            let covered = range.columns.contains(&c) && range.rows.contains(&r);
            prop_assert_eq!(cell.contains(&5), covered);
        }
        prop_assert_eq!(bin.delete(&5), Some(to));
        prop_assert!(bin.cells().all(|(_, cell)| cell.is_empty()));
        prop_assert!(bin.is_empty());
    }

    #[test]
    fn duplicate_insert_leaves_state_unchanged(
        first in inside_rect(),
        second in any_rect(),
    ) {
        let mut bin = Bin::new(5, 5, WORLD, WORLD).unwrap();
        bin.insert(first, 1_u32).unwrap();
        let before: Vec<Vec<u32>> = bin.cells().map(|(_, c)| c.to_vec()).collect();
        prop_assert!(bin.insert(second, 1).is_err());
        let after: Vec<Vec<u32>> = bin.cells().map(|(_, c)| c.to_vec()).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(bin.get(&1), Some(&first));
    }
}

#[test]
fn two_large_objects_in_five_by_five_grid() {
    let mut bin = Bin::new(5, 5, WORLD, WORLD).unwrap();
    bin.insert(Rect::new(22.0, 34.0, 300.0, 300.0), 1_u32).unwrap();
    bin.insert(Rect::new(511.0, 300.0, 400.0, 400.0), 2).unwrap();
    let mut all: Vec<u32> = bin.all_objects().into_iter().copied().collect();
    all.sort_unstable();
    assert_eq!(all, [1, 2]);
}
