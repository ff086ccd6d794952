//! Tests for seam records, folded corners, and adjacency resolution.

use super::resolve::match_side;
use super::*;
use crate::fold::validate_net;
use crate::net::rand::{draw_net_growth, GrowthCfg, ReplayToken};
use crate::net::{build_fold_tree, Dir, FaceId, Placement};
use nalgebra::Vector3;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn pl(face: usize, x: i32, y: i32) -> Placement {
    Placement::new(face, x, y)
}

fn cross() -> Vec<Placement> {
    vec![
        pl(0, 2, 2),
        pl(1, 2, 1),
        pl(2, 2, 3),
        pl(3, 1, 2),
        pl(4, 3, 2),
        pl(5, 2, 4),
    ]
}

#[test]
fn side_matching_detects_endpoint_order() {
    let a = (Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    let aligned = (Vector3::new(0.001, 0.0, 0.0), Vector3::new(1.001, 0.0, 0.0));
    let swapped = (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
    let apart = (Vector3::new(0.0, 2.0, 0.0), Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(match_side(a, aligned), Some(false));
    assert_eq!(match_side(a, swapped), Some(true));
    assert_eq!(match_side(a, apart), None);
}

#[test]
fn palette_is_distinct_per_side() {
    let colors: HashSet<u32> = Dir::ALL.iter().map(|&d| side_color(d)).collect();
    assert_eq!(colors.len(), 4);
}

#[test]
fn cross_fold_geometry() {
    let faces = cross();
    let tree = build_fold_tree(&faces).expect("nonempty input");
    let corners = folded_corners(&faces, &tree);
    // The root face keeps its local frame.
    assert!((corners[0][0] - Vector3::new(-0.5, 0.5, 0.0)).norm() < 1e-9);
    assert!((corners[0][2] - Vector3::new(0.5, -0.5, 0.0)).norm() < 1e-9);
    // The tail face closes the cube at z = -1, upside down.
    let expected_tail = [
        Vector3::new(-0.5, -0.5, -1.0),
        Vector3::new(0.5, -0.5, -1.0),
        Vector3::new(0.5, 0.5, -1.0),
        Vector3::new(-0.5, 0.5, -1.0),
    ];
    for (got, want) in corners[5].iter().zip(expected_tail.iter()) {
        assert!((got - want).norm() < 1e-9, "got {got:?}, want {want:?}");
    }
    // Everything lies inside the folded cube volume.
    for cs in &corners {
        for c in cs {
            assert!(c.x.abs() <= 0.5 + 1e-9 && c.y.abs() <= 0.5 + 1e-9);
            assert!((-1.0 - 1e-9..=1e-9).contains(&c.z));
        }
    }
}

#[test]
fn folded_corners_hit_the_eight_cube_vertices() {
    let faces = cross();
    let tree = build_fold_tree(&faces).expect("nonempty input");
    // Quantize to half-unit steps; each cube vertex gathers three faces.
    let mut counts: HashMap<(i64, i64, i64), usize> = HashMap::new();
    for cs in folded_corners(&faces, &tree) {
        for c in cs {
            let key = (
                (c.x * 2.0).round() as i64,
                (c.y * 2.0).round() as i64,
                (c.z * 2.0).round() as i64,
            );
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    assert_eq!(counts.len(), 8);
    assert!(counts.values().all(|&k| k == 3));
}

#[test]
fn a_lone_face_keeps_local_corners() {
    let faces = [pl(0, 0, 0)];
    let tree = build_fold_tree(&faces).expect("nonempty input");
    let corners = folded_corners(&faces, &tree);
    assert_eq!(corners.len(), 1);
    assert!((corners[0][2] - Vector3::new(0.5, -0.5, 0.0)).norm() < 1e-12);
}

#[test]
fn cross_adjacency_is_complete_and_symmetric() {
    let map = compute_adjacency(&cross());
    assert_eq!(map.len(), 24);
    for f in 0..6 {
        for side in Dir::ALL {
            let link = map.get(FaceId(f), side).expect("valid nets claim every side");
            assert_eq!(link.color, side_color(side));
            // Folds preserve orientation, so seams always meet reversed.
            assert!(link.reversed);
            let back = map.get(link.face, link.side).expect("mirror entry");
            assert_eq!(back.face, FaceId(f));
            assert_eq!(back.side, side);
            assert_eq!(back.reversed, link.reversed);
        }
    }
    // 12 distinct unordered pairs: 5 hinge seams plus 7 closing seams.
    let mut pairs: HashSet<((usize, usize), (usize, usize))> = HashSet::new();
    for (f, s, l) in map.iter() {
        let a = (f.0, s.index());
        let b = (l.face.0, l.side.index());
        pairs.insert(if a <= b { (a, b) } else { (b, a) });
    }
    assert_eq!(pairs.len(), 12);
}

#[test]
fn cross_hinge_and_closing_links() {
    let map = compute_adjacency(&cross());
    let expect = |f: usize, s: Dir, tf: usize, ts: Dir| {
        assert_eq!(
            map.get(FaceId(f), s),
            Some(EdgeLink {
                face: FaceId(tf),
                side: ts,
                color: side_color(s),
                reversed: true,
            }),
            "face {f} side {s:?}"
        );
    };
    // Hinge seams around the center face.
    expect(0, Dir::Top, 1, Dir::Bottom);
    expect(0, Dir::Bottom, 2, Dir::Top);
    expect(0, Dir::Left, 3, Dir::Right);
    expect(0, Dir::Right, 4, Dir::Left);
    // The hinge chain down the tail.
    expect(2, Dir::Bottom, 5, Dir::Top);
    // A closing seam: the up-arm's far edge meets the tail face.
    expect(1, Dir::Top, 5, Dir::Bottom);
}

#[test]
fn invalid_nets_produce_an_empty_map() {
    let block = [
        pl(0, 0, 0),
        pl(1, 1, 0),
        pl(2, 2, 0),
        pl(3, 0, 1),
        pl(4, 1, 1),
        pl(5, 2, 1),
    ];
    assert!(compute_adjacency(&block).is_empty());
    let strip: Vec<Placement> = (0..6).map(|i| pl(i as usize, i, 0)).collect();
    assert!(compute_adjacency(&strip).is_empty());
    assert!(compute_adjacency(&[]).is_empty());
}

#[test]
fn adjacency_is_idempotent() {
    let faces = cross();
    assert_eq!(compute_adjacency(&faces), compute_adjacency(&faces));
}

#[test]
fn layered_resolver_matches_the_gated_entry() {
    let faces = cross();
    let tree = build_fold_tree(&faces).expect("nonempty input");
    assert_eq!(resolve_with_tree(&faces, &tree), compute_adjacency(&faces));
}

#[test]
fn ungated_resolver_still_reports_hinge_contacts() {
    // A strip does not close into a cube, but its hinge seams are real
    // contacts and the layered entry point reports them.
    let strip: Vec<Placement> = (0..6).map(|i| pl(i as usize, i, 0)).collect();
    let tree = build_fold_tree(&strip).expect("nonempty input");
    let map = resolve_with_tree(&strip, &tree);
    assert!(!map.is_empty());
}

proptest! {
    #[test]
    fn generated_valid_nets_have_complete_symmetric_seams(
        seed in any::<u64>(),
        index in any::<u64>(),
        bias in 0.0f64..=1.0,
    ) {
        let net = draw_net_growth(GrowthCfg { snake_bias: bias }, ReplayToken { seed, index });
        let map = compute_adjacency(&net);
        if validate_net(&net).is_ok() {
            prop_assert_eq!(map.len(), 24);
            for (f, s, l) in map.iter() {
                prop_assert!(l.reversed);
                let back = map.get(l.face, l.side);
                prop_assert_eq!(
                    back,
                    Some(EdgeLink {
                        face: f,
                        side: s,
                        color: side_color(l.side),
                        reversed: true,
                    })
                );
            }
        } else {
            prop_assert!(map.is_empty());
        }
    }
}
