//! Geometric properties of each generated fixture, checked on real files

use trifix::fixtures::parallel_planes::{plane_level, TOLERANCE, TRIANGLES_PER_PLANE};
use trifix::geometry::{Coord, Triple};
use trifix::sampler::{FixedSampler, RandomSampler};
use trifix::verify::verify;
use trifix::FixtureKind;

use super::helpers::{body_lines, generate_into_temp, load};

#[test]
fn big_triangle_has_three_thousand_points_on_zero_plane() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::BigTriangle, &mut RandomSampler::seeded(1));
    let parsed = load(&path);

    assert_eq!(parsed.declared_count, 1_000);
    assert_eq!(parsed.triples.len(), 3 + 3 * 999);
    assert!(parsed.triples.iter().all(|t| t.sum() == 0.0));
}

#[test]
fn big_triangle_with_collapsed_ranges_is_all_origin() {
    let (_temp, path) = generate_into_temp(FixtureKind::BigTriangle, &mut FixedSampler(0));
    let lines = body_lines(&path);

    assert_eq!(lines.len(), 3_000);
    assert!(lines.iter().all(|l| l == "0 0 0"));
}

#[test]
fn parallel_planes_points_lie_on_their_plane() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::ParallelPlanes, &mut RandomSampler::seeded(2));
    let parsed = load(&path);

    assert_eq!(parsed.declared_count, 100_000);
    assert_eq!(parsed.triples.len(), 300_000);
    for (i, point) in parsed.triples.iter().enumerate() {
        let level = plane_level(i / (TRIANGLES_PER_PLANE * 3));
        assert!((point.sum() - level).abs() < TOLERANCE, "line {}", i + 2);
        assert!(matches!(point.x, Coord::Int(_)));
        assert!(matches!(point.z, Coord::Real(_)));
    }
}

#[test]
fn parallel_planes_reals_have_at_most_five_decimals() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::ParallelPlanes, &mut RandomSampler::seeded(3));

    for line in body_lines(&path).iter().step_by(997) {
        let z = line.rsplit(' ').next().unwrap();
        let decimals = z.split('.').nth(1).map_or(0, str::len);
        assert!(decimals <= 5, "{line}");
    }
}

#[test]
fn segments_on_plane_sum_to_zero_and_repeat_first_point() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::SegmentsOnPlane, &mut RandomSampler::seeded(4));
    let parsed = load(&path);

    assert_eq!(parsed.triples.len(), 30_000);
    assert!(parsed.triples.iter().all(|t| t.sum() == 0.0));
    for triangle in parsed.triples.chunks(3) {
        assert_eq!(triangle[0], triangle[1]);
    }
}

#[test]
fn segments_on_line_are_on_the_diagonal() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::SegmentsOnLine, &mut RandomSampler::seeded(5));
    let parsed = load(&path);

    assert_eq!(parsed.triples.len(), 30_000);
    assert!(parsed.triples.iter().all(Triple::is_diagonal));
}

#[test]
fn collinear_edge_forces_first_and_last_vertex() {
    let (_temp, path) =
        generate_into_temp(FixtureKind::CollinearEdge, &mut RandomSampler::seeded(6));
    let parsed = load(&path);

    assert_eq!(parsed.triples.len(), 30_000);
    for triangle in parsed.triples.chunks(3) {
        assert!(triangle[0].is_diagonal());
        assert!(triangle[2].is_diagonal());
    }
}

#[test]
fn every_fixture_passes_verification() {
    let mut sampler = RandomSampler::seeded(7);
    for kind in FixtureKind::ALL {
        let (_temp, path) = generate_into_temp(kind, &mut sampler);
        let report = verify(&load(&path), Some(kind));
        assert!(report.is_ok(), "{kind}: {:?}", report.violations.first());
        assert_eq!(report.body_lines, kind.body_lines());
    }
}
