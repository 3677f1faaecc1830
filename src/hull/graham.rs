use crate::foundation::parallel::run_tasks;
use crate::hull::chain::{Chain, ChainSet};

/// Builds all four chains from the per-row boundary maps, one worker per
/// chain when `parallel` is set.
pub(crate) fn build_chains(
    chains: &mut ChainSet,
    left: &[i32],
    right: &[i32],
    parallel: bool,
) {
    let ChainSet { lt, lb, rt, rb } = chains;
    let tasks: Vec<Box<dyn FnOnce() + Send + '_>> = vec![
        Box::new(move || build_chain(lt, left)),
        Box::new(move || build_chain(lb, left)),
        Box::new(move || build_chain(rt, right)),
        Box::new(move || build_chain(rb, right)),
    ];
    run_tasks(parallel, tasks);
}

/// Streaming Graham scan over one chain's row span.
///
/// Walks the rows between the chain's head and terminal extremes, using the
/// per-row boundary column as the candidate vertex. A candidate only enters
/// the stack once it lies strictly outside the tangent line from the last
/// accepted vertex to the terminal vertex (`cmp_base` tracks that line
/// incrementally); on acceptance, previously accepted vertices are popped
/// while the turn they form with the candidate is not strictly convex, so
/// collinear points never survive.
fn build_chain(chain: &mut Chain, x_map: &[i32]) {
    let y_btm = chain.btm;
    if chain.top >= y_btm {
        // Single-row span: the head vertex is the whole chain.
        return;
    }
    let x_btm = x_map[y_btm as usize];

    let head = chain.peek(1);
    let (mut x1, mut y1) = (head.x, head.y);
    let mut diff_x = x_btm - x1;
    let mut diff_y = y_btm - y1;
    let mut cmp_base = x1 * diff_y;

    for y in (y1 + 1)..y_btm {
        let x = x_map[y as usize];
        cmp_base += diff_x;
        if cmp_base > x * diff_y {
            while chain.points().len() > 1 {
                let prev = chain.peek(2);
                let (dx1, dy1) = (x1 - prev.x, y1 - prev.y);
                let (dx, dy) = (x - x1, y - y1);
                if dx * dy1 > dx1 * dy {
                    break;
                }
                chain.pop();
                x1 = prev.x;
                y1 = prev.y;
            }
            chain.push(x, y);
            x1 = x;
            y1 = y;
            diff_x = x_btm - x;
            diff_y = y_btm - y;
            cmp_base = x * diff_y;
        }
    }
    chain.push(x_btm, y_btm);
}

#[cfg(test)]
#[path = "../../tests/unit/hull/graham.rs"]
mod tests;
