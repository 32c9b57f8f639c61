use ring_ops::Footprint;
use scene_host::{CylinderSpec, MockHost, RenderMesh, SceneHost};
use test_harness::oracle::*;

// ── Fixtures ───────────────────────────────────────────────────────────────

/// Unit tetrahedron, outward winding.
fn tetrahedron() -> RenderMesh {
    RenderMesh {
        vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        normals: vec![0.0; 12],
        indices: vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2],
    }
}

fn inverted(mut mesh: RenderMesh) -> RenderMesh {
    for tri in mesh.indices.chunks_exact_mut(3) {
        tri.swap(1, 2);
    }
    mesh
}

struct Cell {
    size: f64,
    position: [f64; 3],
}

impl Footprint for Cell {
    fn bounding_box(&self) -> [f64; 3] {
        [self.size, self.size, 1.0]
    }

    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }
}

// ── Mesh Oracles ───────────────────────────────────────────────────────────

#[test]
fn tetrahedron_passes_every_mesh_check() {
    let verdicts = run_all_mesh_checks(&tetrahedron());
    assert_eq!(verdicts.len(), 4);
    for v in &verdicts {
        assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
    }
}

#[test]
fn missing_triangle_leaves_mesh_open() {
    let mut mesh = tetrahedron();
    mesh.indices.truncate(9);
    let v = check_closed_mesh(&mesh);
    assert!(!v.passed);
    assert_eq!(v.value, Some(3.0));
}

#[test]
fn empty_mesh_is_not_closed() {
    assert!(!check_closed_mesh(&RenderMesh::default()).passed);
}

#[test]
fn one_flipped_triangle_breaks_winding() {
    let mut mesh = tetrahedron();
    mesh.indices.swap(1, 2);
    assert!(check_closed_mesh(&mesh).passed, "still closed");
    assert!(!check_consistent_winding(&mesh).passed);
}

#[test]
fn inside_out_mesh_has_negative_volume() {
    let mesh = inverted(tetrahedron());
    assert!(check_consistent_winding(&mesh).passed);
    let v = check_positive_volume(&mesh);
    assert!(!v.passed);
    assert!(v.value.unwrap() < 0.0);
}

#[test]
fn out_of_range_index_reported() {
    let mut mesh = tetrahedron();
    mesh.indices[0] = 40;
    let v = check_valid_indices(&mesh);
    assert!(!v.passed);
    assert!(v.detail.contains("40"), "{}", v.detail);
}

// ── Layout Oracles ─────────────────────────────────────────────────────────

#[test]
fn bed_bounds() {
    let mesh = tetrahedron();
    assert!(check_within_bed(&mesh, 1.0, 1.0).passed);
    assert!(!check_within_bed(&mesh, 0.5, 1.0).passed);
    assert!(!check_within_bed(&RenderMesh::default(), 10.0, 10.0).passed);
}

#[test]
fn overlapping_footprints_detected() {
    let cells = vec![
        Cell {
            size: 2.0,
            position: [1.0, 1.0, 0.0],
        },
        Cell {
            size: 2.0,
            position: [3.0, 1.0, 0.0],
        },
    ];
    assert!(check_footprints_disjoint(&cells).passed, "touching is fine");

    let overlapping = vec![
        Cell {
            size: 2.0,
            position: [1.0, 1.0, 0.0],
        },
        Cell {
            size: 2.0,
            position: [2.5, 1.5, 0.0],
        },
    ];
    let v = check_footprints_disjoint(&overlapping);
    assert!(!v.passed);
    assert!(v.detail.contains("0 and 1"));
}

// ── Scene Oracles ──────────────────────────────────────────────────────────

#[test]
fn single_object_oracle() {
    let mut host = MockHost::new();
    let spec = CylinderSpec {
        radius: 1.0,
        depth: 1.0,
        vertices: 8,
        location: [0.0; 3],
    };
    let a = host.create_cylinder("a", &spec).unwrap();
    assert!(check_single_object(&host, a).passed);

    let b = host.create_cylinder("b", &spec).unwrap();
    let v = check_single_object(&host, a);
    assert!(!v.passed);
    assert_eq!(v.value, Some(2.0));

    host.delete(&[a]).unwrap();
    let curve = host.create_circle_curve("c", 1.0, [0.0; 3]).unwrap();
    host.delete(&[b]).unwrap();
    assert!(!check_single_object(&host, curve).passed, "curves are not meshes");
}

#[test]
fn mock_cylinder_is_closed_and_outward() {
    let mut host = MockHost::new();
    let cyl = host
        .create_cylinder(
            "cyl",
            &CylinderSpec {
                radius: 2.0,
                depth: 3.0,
                vertices: 12,
                location: [5.0, 5.0, 0.0],
            },
        )
        .unwrap();
    let mesh = scene_host::SceneIntrospect::world_mesh(&host, cyl).unwrap();
    for v in run_all_mesh_checks(&mesh) {
        assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
    }
}
