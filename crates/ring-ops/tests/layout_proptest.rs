//! Property-based tests for the print bed layout.

use proptest::prelude::*;

use ring_ops::{arrange, Footprint};

#[derive(Debug, Clone)]
struct Cell {
    extent: [f64; 2],
    position: [f64; 3],
}

impl Footprint for Cell {
    fn bounding_box(&self) -> [f64; 3] {
        [self.extent[0], self.extent[1], 1.0]
    }

    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }
}

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Ring footprints between the smallest and largest supported sizes, in mm.
fn arb_cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec((12.0f64..25.0, 12.0f64..25.0), 0..40).prop_map(|extents| {
        extents
            .into_iter()
            .map(|(w, h)| Cell {
                extent: [w, h],
                position: [0.0; 3],
            })
            .collect()
    })
}

fn arb_bed() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..300.0, 0.0f64..300.0)
}

fn arb_margin() -> impl Strategy<Value = f64> {
    0.0f64..5.0
}

const TOL: f64 = 1e-9;

fn cell_bounds(cell: &Cell, margin: f64) -> [f64; 4] {
    let dx = margin + cell.extent[0] / 2.0;
    let dy = margin + cell.extent[1] / 2.0;
    [
        cell.position[0] - dx,
        cell.position[1] - dy,
        cell.position[0] + dx,
        cell.position[1] + dy,
    ]
}

proptest! {
    #[test]
    fn layout_is_deterministic(
        cells in arb_cells(),
        (w, h) in arb_bed(),
        margin in arb_margin(),
    ) {
        let a = arrange(cells.clone(), w, h, margin);
        let b = arrange(cells, w, h, margin);
        prop_assert_eq!(a.dropped, b.dropped);
        let pa: Vec<[f64; 3]> = a.placed.iter().map(|c| c.position).collect();
        let pb: Vec<[f64; 3]> = b.placed.iter().map(|c| c.position).collect();
        prop_assert_eq!(pa, pb);
    }
}

proptest! {
    #[test]
    fn layout_keeps_an_order_preserving_prefix(
        cells in arb_cells(),
        (w, h) in arb_bed(),
        margin in arb_margin(),
    ) {
        let total = cells.len();
        let extents: Vec<[f64; 2]> = cells.iter().map(|c| c.extent).collect();
        let out = arrange(cells, w, h, margin);
        prop_assert_eq!(out.placed.len() + out.dropped, total);
        for (cell, extent) in out.placed.iter().zip(&extents) {
            prop_assert_eq!(cell.extent, *extent);
        }
    }
}

proptest! {
    #[test]
    fn placed_cells_stay_on_the_bed(
        cells in arb_cells(),
        (w, h) in arb_bed(),
        margin in arb_margin(),
    ) {
        let out = arrange(cells, w, h, margin);
        for cell in &out.placed {
            let [x0, y0, x1, y1] = cell_bounds(cell, margin);
            prop_assert!(x0 >= -TOL && y0 >= -TOL, "cell starts off the bed: {:?}", cell);
            prop_assert!(x1 <= w + TOL && y1 <= h + TOL, "cell ends off the bed: {:?}", cell);
            prop_assert_eq!(cell.position[2], 0.0);
        }
    }
}

proptest! {
    #[test]
    fn placed_cells_never_overlap(
        cells in arb_cells(),
        (w, h) in arb_bed(),
        margin in arb_margin(),
    ) {
        let out = arrange(cells, w, h, margin);
        let bounds: Vec<[f64; 4]> = out.placed.iter().map(|c| cell_bounds(c, margin)).collect();
        for i in 0..bounds.len() {
            for j in (i + 1)..bounds.len() {
                let [ax0, ay0, ax1, ay1] = bounds[i];
                let [bx0, by0, bx1, by1] = bounds[j];
                let overlap_x = ax0.max(bx0) < ax1.min(bx1) - TOL;
                let overlap_y = ay0.max(by0) < ay1.min(by1) - TOL;
                prop_assert!(!(overlap_x && overlap_y), "cells {} and {} overlap", i, j);
            }
        }
    }
}

proptest! {
    #[test]
    fn bed_smaller_than_first_cell_places_nothing(
        cells in arb_cells(),
        margin in arb_margin(),
    ) {
        prop_assume!(!cells.is_empty());
        let w = cells[0].extent[0] / 2.0;
        let total = cells.len();
        let out = arrange(cells, w, 1000.0, margin);
        prop_assert!(out.placed.is_empty());
        prop_assert_eq!(out.dropped, total);
    }
}
