// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bin basics: insert a few bodies, move one, and run region and point queries.
//!
//! Run with `RUST_LOG=bin_partition=trace` to see the bin's tracing output.

use bin_partition::{Bin, Inclusive, Rect};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bin = Bin::new(5, 5, 600.0, 600.0).expect("valid geometry");

    let ship = Rect::new(22.0, 34.0, 32.0, 32.0);
    let station = Rect::new(200.0, 180.0, 260.0, 200.0);
    let drifter = Rect::new(900.0, 40.0, 10.0, 10.0);
    bin.insert(ship, "ship").unwrap();
    bin.insert(station, "station").unwrap();
    // Outside the world: tracked, but in no cell.
    bin.insert(drifter, "drifter").unwrap();

    println!("Cells after insert:\n{}", bin.dump());
    println!("In cells: {:?}", bin.all_objects());
    println!("Tracked: {}", bin.len());

    let view = Rect::new(0.0, 0.0, 220.0, 220.0);
    println!("Visible in {view:?}:");
    for (name, rect) in bin.query(&view) {
        println!("  {name} at {rect:?}");
    }

    let docked = Rect::new(210.0, 190.0, 32.0, 32.0);
    bin.move_object("ship", &ship, docked);
    println!("Hit at (220, 200): {:?}", bin.query_point(220.0, 200.0));

    if let Err(err) = bin.insert(docked, "ship") {
        println!("Second insert failed: {err}");
    }

    bin.delete(&"drifter");
    println!("Tracked after delete: {}", bin.len());

    // Host geometry: index kurbo rectangles, counting edge contact as a hit.
    let mut ui: Bin<u32, kurbo::Rect, Inclusive> =
        Bin::with_policy(8, 8, 800.0, 800.0, Inclusive).unwrap();
    ui.insert(kurbo::Rect::new(0.0, 0.0, 100.0, 40.0), 1).unwrap();
    ui.insert(kurbo::Rect::new(100.0, 0.0, 200.0, 40.0), 2).unwrap();
    let seam = kurbo::Rect::new(100.0, 10.0, 100.0, 20.0);
    println!("Widgets touching the seam: {:?}", ui.query(&seam));
}
