//! Row-major shelf layout of rings on the print bed.
//!
//! Deterministic and order preserving. The first item that does not fit
//! ends the layout; it and everything after it are dropped.

use tracing::info;

use crate::ring::Footprint;

/// Items that made it onto the bed, in input order, plus how many did not.
#[derive(Debug)]
pub struct Arrangement<T> {
    pub placed: Vec<T>,
    pub dropped: usize,
}

/// Place `items` left to right in rows, starting at the bed origin.
///
/// Every item occupies its bounding box grown by `margin` on each side.
/// Positions are the centres of those cells, at z = 0.
pub fn arrange<T: Footprint>(
    items: Vec<T>,
    bed_width: f64,
    bed_height: f64,
    margin: f64,
) -> Arrangement<T> {
    let total = items.len();
    let mut placed = Vec::with_capacity(total);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f64 = 0.0;

    for mut item in items {
        let bbox = item.bounding_box();
        let dx = margin + bbox[0] / 2.0;
        let dy = margin + bbox[1] / 2.0;

        if x + 2.0 * dx > bed_width {
            x = 0.0;
            y += row_height;
            row_height = 0.0;
        }
        if x + 2.0 * dx > bed_width || y + 2.0 * dy > bed_height {
            break;
        }

        item.set_position([x + dx, y + dy, 0.0]);
        x += 2.0 * dx;
        row_height = row_height.max(2.0 * dy);
        placed.push(item);
    }

    let dropped = total - placed.len();
    if dropped > 0 {
        info!(placed = placed.len(), dropped, "print bed full, dropping remaining rings");
    }
    Arrangement { placed, dropped }
}
