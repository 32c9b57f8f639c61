//! STL export of a finished mesh, binary or ASCII.

use std::fmt::Write as _;

use scene_host::{ObjectHandle, RenderMesh, SceneIntrospect};

use crate::errors::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    Binary,
    Ascii,
}

/// One triangle with its face normal.
struct Facet {
    normal: [f32; 3],
    corners: [[f32; 3]; 3],
}

/// Check the mesh and collect its facets.
fn facets(mesh: &RenderMesh) -> Result<Vec<Facet>, ExportError> {
    if mesh.triangle_count() == 0 {
        return Err(ExportError::Empty);
    }
    let vertex_count = mesh.vertex_count();
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(ExportError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    let corner = |i: u32| {
        let v = i as usize * 3;
        [mesh.vertices[v], mesh.vertices[v + 1], mesh.vertices[v + 2]]
    };
    Ok(mesh
        .indices
        .chunks_exact(3)
        .map(|tri| {
            let corners = [corner(tri[0]), corner(tri[1]), corner(tri[2])];
            Facet {
                normal: face_normal(&corners),
                corners,
            }
        })
        .collect())
}

fn face_normal([a, b, c]: &[[f32; 3]; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 1e-12 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Binary STL: 80-byte header, u32 LE triangle count, then 50 bytes per
/// triangle (normal, three corners, zero attribute count).
pub fn export_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    let facets = facets(mesh)?;
    let mut buf = Vec::with_capacity(84 + facets.len() * 50);

    let header = format!("binary STL: {}", name);
    buf.extend_from_slice(&header.as_bytes()[..header.len().min(80)]);
    buf.resize(80, 0u8);
    buf.extend_from_slice(&(facets.len() as u32).to_le_bytes());

    for facet in &facets {
        for c in std::iter::once(&facet.normal).chain(&facet.corners).flatten() {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    Ok(buf)
}

/// ASCII STL text for the mesh.
pub fn export_ascii_stl(mesh: &RenderMesh, name: &str) -> Result<String, ExportError> {
    let facets = facets(mesh)?;
    let mut out = String::with_capacity(facets.len() * 256);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "solid {}", name);
    for facet in &facets {
        let [nx, ny, nz] = facet.normal;
        let _ = writeln!(out, "  facet normal {} {} {}", nx, ny, nz);
        out.push_str("    outer loop\n");
        for [x, y, z] in facet.corners {
            let _ = writeln!(out, "      vertex {} {} {}", x, y, z);
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    let _ = writeln!(out, "endsolid {}", name);
    Ok(out)
}

/// Export a scene object's world-space mesh, named after the object.
pub fn export_object_stl(
    host: &dyn SceneIntrospect,
    object: ObjectHandle,
    format: StlFormat,
) -> Result<Vec<u8>, ExportError> {
    let mesh = host
        .world_mesh(object)
        .ok_or(ExportError::NoMesh { handle: object })?;
    let name = host.object_name(object).unwrap_or_default();
    match format {
        StlFormat::Binary => export_binary_stl(&mesh, &name),
        StlFormat::Ascii => export_ascii_stl(&mesh, &name).map(String::into_bytes),
    }
}
