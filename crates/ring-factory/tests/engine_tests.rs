use ring_factory::*;
use ring_ops::OpError;
use ruler_types::*;
use scene_host::{
    BooleanOp, CylinderSpec, MockHost, ObjectKind, SceneHost, SceneIntrospect,
};

/// Default form values with a fixed year so labels are stable.
fn params() -> RulerParams {
    RulerParams {
        year: 26,
        ..RulerParams::default()
    }
}

fn run(params: RulerParams, host: &mut MockHost) -> Result<BatchReport, FactoryError> {
    RingRuler::new(params)?.run(host)
}

// ── Happy path ─────────────────────────────────────────────────────────────

#[test]
fn three_rings_merge_into_one_mesh() {
    let mut host = MockHost::new();
    let report = run(params(), &mut host).unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.placed(), 3);
    assert_eq!(report.dropped, 0);
    assert_eq!(report.labels, vec!["CH 15 0001", "CH 15 0002", "CH 15 0003"]);

    let mesh = report.final_mesh.expect("final mesh");
    assert_eq!(host.objects(), vec![mesh], "only the merged mesh is left");
    assert_eq!(host.object_kind(mesh), Some(ObjectKind::Mesh));
    assert_eq!(host.object_name(mesh).as_deref(), Some(FINAL_MESH_NAME));

    let counts = host.polygon_counts(mesh).unwrap();
    assert_eq!(counts.quads + counts.ngons, 0, "final mesh is triangulated");
    assert!(counts.triangles > 0);
}

#[test]
fn no_orphaned_data_blocks_after_success() {
    let mut host = MockHost::new();
    run(params(), &mut host).unwrap();
    assert_eq!(host.data_block_count(), 1);
}

#[test]
fn boolean_count_does_not_grow_with_batch_size() {
    let mut one = MockHost::new();
    let single = run(
        RulerParams {
            end: 1,
            ..params()
        },
        &mut one,
    )
    .unwrap();

    let mut many = MockHost::new();
    let ten = run(
        RulerParams {
            end: 10,
            ..params()
        },
        &mut many,
    )
    .unwrap();

    assert_eq!(ten.placed(), 10);
    assert_eq!(single.booleans, 2, "label band and year band");
    assert_eq!(ten.booleans, single.booleans);
    // Plus the one difference that hollowed the prototype.
    assert_eq!(many.boolean_log().len(), 3);
}

#[test]
fn inline_year_needs_a_single_union() {
    let mut host = MockHost::new();
    let report = run(
        RulerParams {
            year_placement: YearPlacement::Inline,
            ..params()
        },
        &mut host,
    )
    .unwrap();
    assert_eq!(report.labels[0], "CH 15 26 0001");
    assert_eq!(report.booleans, 1);
    assert_eq!(host.objects().len(), 1);
}

#[test]
fn standalone_variant_subtracts_bores_after_unions() {
    let mut host = MockHost::new();
    let report = run(
        RulerParams {
            variant: RingVariant::Standalone,
            ..params()
        },
        &mut host,
    )
    .unwrap();

    assert_eq!(report.booleans, 3);
    let ops: Vec<BooleanOp> = host.boolean_log().iter().map(|b| b.op).collect();
    assert_eq!(ops, vec![BooleanOp::Union, BooleanOp::Union, BooleanOp::Difference]);
    assert_eq!(host.objects(), vec![report.final_mesh.unwrap()]);
}

#[test]
fn missing_font_falls_back_to_default() {
    let mut host = MockHost::with_fonts(["Ubuntu Bold"]);
    let report = run(
        RulerParams {
            font: Some("Not Installed".to_string()),
            ..params()
        },
        &mut host,
    )
    .unwrap();
    assert!(report.final_mesh.is_some());
}

// ── Layout truncation and empty batches ────────────────────────────────────

#[test]
fn small_bed_drops_trailing_rings() {
    let mut host = MockHost::new();
    let report = run(
        RulerParams {
            bed_width_mm: 30.0,
            bed_height_mm: 30.0,
            ..params()
        },
        &mut host,
    )
    .unwrap();
    assert_eq!(report.labels, vec!["CH 15 0001"]);
    assert_eq!(report.dropped, 2);
    assert_eq!(host.objects().len(), 1);
}

#[test]
fn bed_smaller_than_one_ring_yields_nothing() {
    let mut host = MockHost::new();
    let report = run(
        RulerParams {
            bed_width_mm: 10.0,
            ..params()
        },
        &mut host,
    )
    .unwrap();
    assert_eq!(report.placed(), 0);
    assert_eq!(report.dropped, 3);
    assert_eq!(report.final_mesh, None);
    assert!(host.objects().is_empty(), "prototype never baked");
}

#[test]
fn reversed_range_is_an_empty_success() {
    let mut host = MockHost::new();
    let report = run(
        RulerParams {
            begin: 9,
            end: 3,
            ..params()
        },
        &mut host,
    )
    .unwrap();
    assert_eq!(report.requested, 0);
    assert_eq!(report.final_mesh, None);
    assert!(host.boolean_log().is_empty());
}

// ── Failures ───────────────────────────────────────────────────────────────

#[test]
fn invalid_parameters_are_rejected_up_front() {
    let err = RingRuler::new(RulerParams {
        ring_size: 25,
        ..params()
    })
    .err()
    .unwrap();
    assert!(matches!(err, FactoryError::Params(ParamError::OutOfRange { field: "ring_size", .. })));
}

#[test]
fn failed_union_rolls_back_the_whole_batch() {
    let mut host = MockHost::new();
    let keep = host
        .create_cylinder(
            "Existing",
            &CylinderSpec {
                radius: 1.0,
                depth: 1.0,
                vertices: 8,
                location: [0.0; 3],
            },
        )
        .unwrap();
    // Boolean 1 hollows the prototype, boolean 2 is the first merge union.
    host.fail_boolean_at(2);

    let err = run(params(), &mut host).unwrap_err();
    assert_eq!(err.stage(), Some(AssemblyStage::Merge));
    assert!(matches!(
        err,
        FactoryError::Stage {
            source: OpError::BooleanFailed {
                operation: BooleanOp::Union,
                ..
            },
            ..
        }
    ));
    assert_eq!(host.objects(), vec![keep], "scene is back to where it started");
}

#[test]
fn failed_bake_aborts_during_materialize() {
    let mut host = MockHost::new();
    host.fail_boolean_at(1);
    let err = run(params(), &mut host).unwrap_err();
    assert_eq!(err.stage(), Some(AssemblyStage::Materialize));
    assert!(host.objects().is_empty());
}

#[test]
fn failed_difference_in_standalone_merge() {
    let mut host = MockHost::new();
    // Two unions succeed, the bore difference does not.
    host.fail_boolean_at(3);
    let err = run(
        RulerParams {
            variant: RingVariant::Standalone,
            ..params()
        },
        &mut host,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        FactoryError::Stage {
            stage: AssemblyStage::Merge,
            source: OpError::BooleanFailed {
                operation: BooleanOp::Difference,
                ..
            },
        }
    ));
    assert!(host.objects().is_empty());
}

// ── Reporting ──────────────────────────────────────────────────────────────

#[test]
fn report_serializes_without_scene_handles() {
    let mut host = MockHost::new();
    let report = run(params(), &mut host).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["requested"], 3);
    assert_eq!(json["labels"][2], "CH 15 0003");
    assert_eq!(json["booleans"], 2);
    assert!(json.get("final_mesh").is_none());
}
