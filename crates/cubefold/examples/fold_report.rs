//! Fold verdict and seam probe for preset layouts.
//!
//! Purpose
//! - Provide a reproducible, code-backed answer to "what does the core say
//!   about the classic layouts, and how long does a full seam pass take?"
//! - Print the plus net's fold tree and seam table in an eyeballable form.
//!
//! References
//! - Code: crates/cubefold/src/fold/validate.rs::validate_net
//! - Code: crates/cubefold/src/seam/resolve.rs::compute_adjacency

use std::time::Instant;

use cubefold::api::{build_fold_tree, compute_adjacency, validate_net, FoldNode, Placement};

fn main() {
    let presets: [(&str, Vec<Placement>); 5] = [
        ("plus", plus()),
        ("t_shape", t_shape()),
        ("staircase", staircase()),
        ("block_3x2", block()),
        ("strip_1x6", strip()),
    ];
    for (name, faces) in &presets {
        match validate_net(faces) {
            Ok(()) => println!("{name}: folds into a cube"),
            Err(e) => println!("{name}: rejected ({e})"),
        }
    }

    let faces = plus();
    let tree = build_fold_tree(&faces).expect("plus net is nonempty");
    println!("\nfold tree (plus):");
    print_tree(&tree);

    let start = Instant::now();
    let map = compute_adjacency(&faces);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    println!("\nseam table (plus): links={} time_ms={elapsed:.3}", map.len());
    for (f, s, l) in map.iter() {
        println!(
            "face {} {:?} -> face {} {:?} color=#{:06x} reversed={}",
            f.0, s, l.face.0, l.side, l.color, l.reversed
        );
    }
}

fn print_tree(node: &FoldNode) {
    let indent = "  ".repeat(node.depth as usize);
    match node.hinge {
        Some(d) => println!("{indent}face {} (hinge {:?})", node.face.0, d),
        None => println!("{indent}face {} (root)", node.face.0),
    }
    for child in &node.children {
        print_tree(child);
    }
}

fn pl(face: usize, x: i32, y: i32) -> Placement {
    Placement::new(face, x, y)
}

fn plus() -> Vec<Placement> {
    vec![
        pl(0, 2, 2),
        pl(1, 2, 1),
        pl(2, 2, 3),
        pl(3, 1, 2),
        pl(4, 3, 2),
        pl(5, 2, 4),
    ]
}

fn t_shape() -> Vec<Placement> {
    vec![
        pl(0, 1, 0),
        pl(1, 2, 0),
        pl(2, 3, 0),
        pl(3, 2, 1),
        pl(4, 2, 2),
        pl(5, 2, 3),
    ]
}

fn staircase() -> Vec<Placement> {
    vec![
        pl(0, 0, 0),
        pl(1, 1, 0),
        pl(2, 1, 1),
        pl(3, 2, 1),
        pl(4, 2, 2),
        pl(5, 3, 2),
    ]
}

fn block() -> Vec<Placement> {
    vec![
        pl(0, 0, 0),
        pl(1, 1, 0),
        pl(2, 2, 0),
        pl(3, 0, 1),
        pl(4, 1, 1),
        pl(5, 2, 1),
    ]
}

fn strip() -> Vec<Placement> {
    (0..6).map(|i| pl(i as usize, i, 0)).collect()
}
