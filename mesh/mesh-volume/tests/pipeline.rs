//! End-to-end tests for the volume meshing pipeline.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::cast_precision_loss)]

use approx::assert_relative_eq;
use mesh_types::{IndexedMesh, Matrix3, MeshBounds, Point3, Vector3};
use mesh_volume::{
    LabelVolume, MeshingError, MeshingParams, WorldTransform, mesh_volume, process,
    process_to_writer, target_vertex_count,
};
use tempfile::tempdir;

// =============================================================================
// Fixtures
// =============================================================================

fn ball(n: usize, radius: f64, label: u16) -> LabelVolume<u16> {
    let c = (n as f64 - 1.0) / 2.0;
    LabelVolume::from_fn((n, n, n), |i, j, k| {
        let d2 = [i, j, k].iter().map(|&x| (x as f64 - c).powi(2)).sum::<f64>();
        if d2 <= radius * radius { label } else { 0 }
    })
}

fn single_voxel() -> LabelVolume<u8> {
    let mut volume = LabelVolume::new((3, 3, 3));
    volume.set(1, 1, 1, 1);
    volume
}

fn to_text<T: Copy + PartialEq + Default>(
    volume: &LabelVolume<T>,
    transform: &WorldTransform,
    params: &MeshingParams<T>,
) -> String {
    let mut out = Vec::new();
    process_to_writer(volume, transform, &mut out, params).unwrap();
    String::from_utf8(out).unwrap()
}

/// Parse OBJ text back into a mesh with 0-based faces.
fn parse_obj(text: &str) -> IndexedMesh {
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    for line in text.lines() {
        let mut parts = line.split(' ');
        match parts.next() {
            Some("v") => positions.extend(parts.map(|p| p.parse::<f64>().unwrap())),
            Some("f") => indices.extend(parts.map(|p| p.parse::<u32>().unwrap() - 1)),
            other => panic!("unexpected line kind {other:?}"),
        }
    }
    IndexedMesh::from_raw(&positions, &indices)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn empty_volume_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.obj");
    let volume = LabelVolume::<u8>::new((10, 10, 10));

    for params in [MeshingParams::default(), MeshingParams::unsmoothed()] {
        let report = process(&volume, &WorldTransform::identity(), &path, &params).unwrap();
        assert_eq!(report.vertices, 0);
        assert_eq!(report.faces, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}

#[test]
fn single_voxel_unsmoothed_is_closed() {
    let text = to_text(
        &single_voxel(),
        &WorldTransform::identity(),
        &MeshingParams::unsmoothed(),
    );
    let mesh = parse_obj(&text);

    assert!(!mesh.vertices.is_empty());
    assert!(mesh.has_valid_indices());
    assert!(mesh.is_closed());
}

#[test]
fn transform_applies_origin_and_directions() {
    let volume = ball(12, 3.0, 1);
    let params = MeshingParams::unsmoothed();
    let voxel_mesh = mesh_volume(&volume, &params).unwrap();

    let transform = WorldTransform::new(Point3::new(1.0, 2.0, 3.0), Matrix3::identity());
    let mesh = parse_obj(&to_text(&volume, &transform, &params));

    assert_eq!(mesh.vertices.len(), voxel_mesh.vertices.len());
    for (world, voxel) in mesh.vertices.iter().zip(&voxel_mesh.vertices) {
        let expected = voxel.position + Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(world.position, expected, epsilon = 1e-4);
    }
}

#[test]
fn anisotropic_spacing_scales_extent() {
    let volume = ball(12, 3.0, 1);
    let params = MeshingParams::unsmoothed();
    let transform = WorldTransform::from_spacing(Point3::origin(), Vector3::new(1.0, 2.0, 0.5));
    let mesh = parse_obj(&to_text(&volume, &transform, &params));

    let size = mesh.bounds().size();
    assert_relative_eq!(size.y, 2.0 * size.x, epsilon = 1e-3);
    assert_relative_eq!(size.z, 0.5 * size.x, epsilon = 1e-3);
}

#[test]
fn reverse_winding_toggles_face_order() {
    let volume = ball(10, 2.5, 4);
    let identity = WorldTransform::identity();
    let forward = to_text(&volume, &identity, &MeshingParams::default());
    let reversed = to_text(
        &volume,
        &identity,
        &MeshingParams::default().with_reverse_winding(true),
    );

    let split = |text: &str| -> (Vec<String>, Vec<Vec<String>>) {
        let vertices = text
            .lines()
            .filter(|l| l.starts_with("v "))
            .map(str::to_owned)
            .collect();
        let faces = text
            .lines()
            .filter(|l| l.starts_with("f "))
            .map(|l| l.split(' ').skip(1).map(str::to_owned).collect())
            .collect();
        (vertices, faces)
    };

    let (fv, ff) = split(&forward);
    let (rv, rf) = split(&reversed);
    assert_eq!(fv, rv);
    assert_eq!(ff.len(), rf.len());
    for (f, r) in ff.iter().zip(&rf) {
        assert_eq!(f[0], r[2]);
        assert_eq!(f[1], r[1]);
        assert_eq!(f[2], r[0]);
    }
}

#[test]
fn default_orientation_per_strategy() {
    let volume = ball(12, 3.0, 1);
    let identity = WorldTransform::identity();

    // Smoothed output faces outward, unsmoothed inward
    let smoothed = parse_obj(&to_text(&volume, &identity, &MeshingParams::default()));
    let unsmoothed = parse_obj(&to_text(&volume, &identity, &MeshingParams::unsmoothed()));
    assert!(smoothed.signed_volume() > 0.0);
    assert!(unsmoothed.signed_volume() < 0.0);
}

#[test]
fn identical_inputs_give_identical_files() {
    let dir = tempdir().unwrap();
    let volume = ball(12, 3.5, 2);
    let transform = WorldTransform::new(
        Point3::new(-10.5, 3.25, 0.0),
        Matrix3::new(0.7, 0.0, 0.0, 0.0, 0.7, 0.0, 0.0, 0.0, 1.2),
    );

    for params in [
        MeshingParams::default(),
        MeshingParams::unsmoothed(),
        MeshingParams::default().with_decimation(0.5),
    ] {
        let a = dir.path().join("a.obj");
        let b = dir.path().join("b.obj");
        process(&volume, &transform, &a, &params).unwrap();
        process(&volume, &transform, &b, &params).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}

#[test]
fn mask_touching_every_face_is_closed() {
    let volume = LabelVolume::from_vec((6, 6, 6), vec![9u8; 216]).unwrap();
    for params in [MeshingParams::default(), MeshingParams::unsmoothed()] {
        let mesh = mesh_volume(&volume, &params).unwrap();
        assert!(!mesh.faces.is_empty());
        assert!(mesh.is_closed());
    }
}

#[test]
fn mask_touching_one_face_is_closed() {
    let volume = LabelVolume::from_fn((8, 8, 8), |i, _, _| u8::from(i < 4));
    for params in [MeshingParams::default(), MeshingParams::unsmoothed()] {
        let mesh = mesh_volume(&volume, &params).unwrap();
        assert!(!mesh.faces.is_empty());
        assert!(mesh.is_closed());
    }
}

#[test]
fn decimation_does_not_exceed_target() {
    let volume = ball(12, 3.0, 1);
    let full = mesh_volume(&volume, &MeshingParams::default()).unwrap();

    for ratio in [1.0, 0.5, 0.25] {
        let mesh = mesh_volume(&volume, &MeshingParams::default().with_decimation(ratio)).unwrap();
        let target = target_vertex_count(full.vertices.len(), ratio).unwrap();
        assert!(mesh.vertices.len() <= target, "ratio {ratio}");
        assert!(mesh.is_closed(), "ratio {ratio}");
    }
}

#[test]
fn decimation_below_a_tetrahedron_empties_the_mesh() {
    let params = MeshingParams::unsmoothed();
    for ratio in [0.5, 0.01] {
        let mut out = Vec::new();
        let report = process_to_writer(
            &single_voxel(),
            &WorldTransform::identity(),
            &mut out,
            &params.clone().with_decimation(ratio),
        )
        .unwrap();

        assert_eq!(report.extracted_vertices, 6);
        assert!(report.vertices <= target_vertex_count(6, ratio).unwrap());
        assert!(report.was_decimated());
        assert!(out.is_empty(), "ratio {ratio}");
    }
}

#[test]
fn unsmoothed_vertices_sit_between_voxel_centers() {
    let mut volume = LabelVolume::<u8>::new((5, 5, 5));
    volume.set(2, 2, 2, 1);
    let text = to_text(&volume, &WorldTransform::identity(), &MeshingParams::unsmoothed());

    let mut lines: Vec<&str> = text.lines().filter(|l| l.starts_with("v ")).collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        [
            "v 1.25 2.0 2.0",
            "v 2.0 1.25 2.0",
            "v 2.0 2.0 1.25",
            "v 2.0 2.0 2.75",
            "v 2.0 2.75 2.0",
            "v 2.75 2.0 2.0",
        ]
    );
}

#[test]
fn zero_decimation_is_rejected() {
    let err = mesh_volume(&ball(8, 2.0, 1), &MeshingParams::default().with_decimation(0.0))
        .unwrap_err();
    assert!(matches!(err, MeshingError::InvalidDecimation(r) if r == 0.0));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.obj");
    let err = process(
        &single_voxel(),
        &WorldTransform::identity(),
        &path,
        &MeshingParams::unsmoothed(),
    )
    .unwrap_err();
    assert!(matches!(err, MeshingError::OutputFile { .. }));
}

#[test]
fn mask_values_restrict_surface() {
    // Two separated balls with different labels
    let volume = LabelVolume::from_fn((20, 10, 10), |i, j, k| {
        let d2 = |cx: f64| {
            (i as f64 - cx).powi(2) + (j as f64 - 4.5).powi(2) + (k as f64 - 4.5).powi(2)
        };
        if d2(4.5) <= 6.25 {
            1u8
        } else if d2(14.5) <= 6.25 {
            2
        } else {
            0
        }
    });

    let params = MeshingParams::unsmoothed();
    let both = mesh_volume(&volume, &params).unwrap();
    let first = mesh_volume(&volume, &params.clone().with_mask_values(vec![1])).unwrap();
    let second = mesh_volume(&volume, &params.with_mask_values(vec![2])).unwrap();

    assert_eq!(both.vertices.len(), first.vertices.len() + second.vertices.len());
    assert!(first.vertices.iter().all(|v| v.position.x < 10.0));
    assert!(second.vertices.iter().all(|v| v.position.x > 10.0));
}

#[test]
fn float_labels_are_supported() {
    let volume = LabelVolume::from_fn((7, 7, 7), |i, j, k| {
        if (2..5).contains(&i) && (2..5).contains(&j) && (2..5).contains(&k) {
            0.5f32
        } else {
            0.0
        }
    });
    let mesh = mesh_volume(&volume, &MeshingParams::unsmoothed()).unwrap();
    assert!(mesh.is_closed());
    assert!(!mesh.faces.is_empty());
}
