use super::*;

use crate::hull::chain::{ChainPoint, Corner};
use crate::hull::scan::BoundsSummary;

fn chain_over(top: i32, btm: i32, x_map: &[i32]) -> Chain {
    let mut chain = Chain::default();
    chain.reset(top, btm, x_map[top as usize]);
    build_chain(&mut chain, x_map);
    chain
}

#[test]
fn single_row_span_stays_a_single_vertex() {
    let chain = chain_over(2, 2, &[9, 9, 3, 9, 9]);
    assert_eq!(chain.points(), &[ChainPoint { x: 3, y: 2 }]);
}

#[test]
fn collinear_rows_are_never_retained() {
    // A straight diagonal boundary: only the two extremes survive.
    let chain = chain_over(0, 4, &[4, 3, 2, 1, 0]);
    assert_eq!(
        chain.points(),
        &[ChainPoint { x: 4, y: 0 }, ChainPoint { x: 0, y: 4 }]
    );
}

#[test]
fn candidate_on_the_tangent_line_is_rejected() {
    // Row 1 sits exactly on the line from (4,0) to (0,2); the tangent gate
    // uses a strict comparison, so it never enters the stack.
    let chain = chain_over(0, 2, &[4, 2, 0]);
    assert_eq!(
        chain.points(),
        &[ChainPoint { x: 4, y: 0 }, ChainPoint { x: 0, y: 2 }]
    );
}

#[test]
fn strictly_outside_candidate_is_kept() {
    let chain = chain_over(0, 2, &[4, 1, 0]);
    assert_eq!(
        chain.points(),
        &[
            ChainPoint { x: 4, y: 0 },
            ChainPoint { x: 1, y: 1 },
            ChainPoint { x: 0, y: 2 },
        ]
    );
}

#[test]
fn accepted_vertex_is_popped_once_it_turns_collinear() {
    // (5,1) clears the tangent gate, but once (1,2) arrives the three points
    // (9,0), (5,1), (1,2) are collinear and the middle one is popped.
    let chain = chain_over(0, 3, &[9, 5, 1, 0]);
    let pts = chain.points();
    assert_eq!(
        pts,
        &[
            ChainPoint { x: 9, y: 0 },
            ChainPoint { x: 1, y: 2 },
            ChainPoint { x: 0, y: 3 },
        ]
    );
    // Convexity invariant: every consecutive turn is strictly convex and
    // rows strictly increase along the chain.
    for w in pts.windows(3) {
        let (a, b, c) = (w[0], w[1], w[2]);
        let cross =
            (c.x - b.x) as i64 * (b.y - a.y) as i64 - (b.x - a.x) as i64 * (c.y - b.y) as i64;
        assert!(cross > 0, "non-convex turn at {b:?}");
    }
    for w in pts.windows(2) {
        assert!(w[0].y < w[1].y);
    }
}

#[test]
fn flipped_right_chain_uses_the_same_code_path() {
    // Right boundary 2,3,4 (flipped: -3,-4,-5) is collinear.
    let chain = chain_over(0, 2, &[-3, -4, -5]);
    assert_eq!(
        chain.points(),
        &[ChainPoint { x: -3, y: 0 }, ChainPoint { x: -5, y: 2 }]
    );
}

#[test]
fn all_four_chains_build_in_one_call() {
    // Diamond boundaries.
    let left = [2, 1, 0, 1, 2];
    let right = [-3, -4, -5, -4, -3];
    let bounds = BoundsSummary {
        top: 0,
        btm: 4,
        l_min_top: 2,
        l_min_btm: 2,
        r_max_top: 2,
        r_max_btm: 2,
    };
    for parallel in [false, true] {
        let mut chains = ChainSet::default();
        chains.init(&bounds, &left, &right);
        build_chains(&mut chains, &left, &right, parallel);
        assert_eq!(
            chains.get(Corner::LeftTop).points(),
            &[ChainPoint { x: 2, y: 0 }, ChainPoint { x: 0, y: 2 }]
        );
        assert_eq!(
            chains.get(Corner::LeftBottom).points(),
            &[ChainPoint { x: 0, y: 2 }, ChainPoint { x: 2, y: 4 }]
        );
        assert_eq!(
            chains.get(Corner::RightTop).points(),
            &[ChainPoint { x: -3, y: 0 }, ChainPoint { x: -5, y: 2 }]
        );
        assert_eq!(
            chains.get(Corner::RightBottom).points(),
            &[ChainPoint { x: -5, y: 2 }, ChainPoint { x: -3, y: 4 }]
        );
    }
}
