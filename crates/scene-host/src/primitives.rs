//! Mesh builders for host primitives and the geometry behind text objects.
//!
//! Text is approximated with one closed block per visible glyph on a fixed
//! advance grid. That keeps glyph count, extent and bend behaviour faithful
//! without shipping a font rasteriser.

use std::f64::consts::TAU;

use crate::tessellation::PolyMesh;
use crate::types::{DeformAxis, TextStyle};

/// Horizontal advance per character, as a fraction of font size.
pub const GLYPH_ADVANCE: f64 = 0.5;
/// Width of a glyph block, as a fraction of font size.
pub const GLYPH_WIDTH: f64 = 0.4;
/// Cap height of a glyph block, as a fraction of font size.
pub const GLYPH_CAP_HEIGHT: f64 = 0.7;
/// Most segments a remesh may cut one glyph into.
const MAX_GLYPH_SEGMENTS: usize = 256;

/// Closed cylinder with n-gon caps and quad sides, centred on the origin.
pub fn cylinder(radius: f64, depth: f64, vertices: u32) -> PolyMesh {
    let n = vertices.max(3) as usize;
    let half = depth / 2.0;
    let mut mesh = PolyMesh::new();

    for z in [-half, half] {
        for i in 0..n {
            let a = i as f64 * TAU / n as f64;
            mesh.positions.push([radius * a.cos(), radius * a.sin(), z]);
        }
    }

    let bottom = |i: usize| (i % n) as u32;
    let top = |i: usize| (n + i % n) as u32;
    for i in 0..n {
        mesh.polygons
            .push(vec![bottom(i), bottom(i + 1), top(i + 1), top(i)]);
    }
    mesh.polygons.push((0..n).map(top).collect());
    mesh.polygons.push((0..n).rev().map(bottom).collect());
    mesh
}

/// Total advance of a text body.
pub fn text_width(body: &str, font_size: f64) -> f64 {
    body.chars().count() as f64 * GLYPH_ADVANCE * font_size
}

/// Glyph blocks for `body` in text-local space.
///
/// The baseline runs along +X from the origin, glyphs rise along +Y and are
/// extruded symmetrically along Z by `extrude + bevel_depth`. With a remesh
/// octree depth, every block is cut along X into cells no longer than
/// `extent / 2^depth`.
pub fn text_blocks(body: &str, style: &TextStyle, remesh_depth: Option<u8>) -> PolyMesh {
    let size = style.font_size;
    let half_depth = style.extrude + style.bevel_depth;
    let cap = GLYPH_CAP_HEIGHT * size;
    let glyph_w = GLYPH_WIDTH * size;
    let gap = (GLYPH_ADVANCE - GLYPH_WIDTH) * size / 2.0;

    let segments = match remesh_depth {
        Some(depth) => {
            let extent = text_width(body, size).max(cap).max(2.0 * half_depth);
            let cell = extent / f64::from(1u32 << depth.min(16));
            ((glyph_w / cell).ceil() as usize).clamp(1, MAX_GLYPH_SEGMENTS)
        }
        None => 1,
    };

    let mut mesh = PolyMesh::new();
    for (i, ch) in body.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let x0 = i as f64 * GLYPH_ADVANCE * size + gap;
        push_block(&mut mesh, x0, glyph_w, cap, half_depth, segments);
    }
    mesh
}

/// A box from `x0` to `x0 + width`, cut into `segments` slices along X.
fn push_block(mesh: &mut PolyMesh, x0: f64, width: f64, cap: f64, half_depth: f64, segments: usize) {
    let base = mesh.positions.len() as u32;
    let corners = [
        (0.0, -half_depth),
        (cap, -half_depth),
        (cap, half_depth),
        (0.0, half_depth),
    ];
    for s in 0..=segments {
        let x = x0 + width * s as f64 / segments as f64;
        for (y, z) in corners {
            mesh.positions.push([x, y, z]);
        }
    }

    let v = |s: usize, c: usize| base + (s * 4 + c % 4) as u32;
    for s in 0..segments {
        for c in 0..4 {
            mesh.polygons
                .push(vec![v(s, c), v(s, c + 1), v(s + 1, c + 1), v(s + 1, c)]);
        }
    }
    mesh.polygons.push(vec![v(0, 3), v(0, 2), v(0, 1), v(0, 0)]);
    mesh.polygons.push(vec![
        v(segments, 0),
        v(segments, 1),
        v(segments, 2),
        v(segments, 3),
    ]);
}

/// Wrap a point given in a circle curve's local frame around that circle.
///
/// The deform axis measures arc length and the curve parameter runs
/// clockwise seen from +Z. Local -Z points away from the centre and the
/// remaining planar axis, negated, becomes height above the curve plane.
/// With `NegX` or `PosY` the mapping keeps orientation, so closed shells
/// stay outward facing; the other two axes mirror them.
pub fn bend_onto_circle(q: [f64; 3], axis: DeformAxis, radius: f64) -> [f64; 3] {
    let (along, across) = match axis {
        DeformAxis::PosX => (q[0], q[1]),
        DeformAxis::NegX => (-q[0], q[1]),
        DeformAxis::PosY => (q[1], q[0]),
        DeformAxis::NegY => (-q[1], q[0]),
    };
    let angle = -along / radius;
    let r = radius - q[2];
    [r * angle.cos(), r * angle.sin(), -across]
}
