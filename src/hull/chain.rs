use crate::hull::scan::BoundsSummary;

/// One of the four corners a monotone hull chain runs toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    /// Left-top chain: from the hull's top row to the leftmost column.
    LeftTop,
    /// Left-bottom chain: from the leftmost column to the bottom row.
    LeftBottom,
    /// Right-top chain: from the top row to the rightmost column.
    RightTop,
    /// Right-bottom chain: from the rightmost column to the bottom row.
    RightBottom,
}

impl Corner {
    /// All four corners in kernel processing order.
    pub const ALL: [Corner; 4] = [
        Corner::LeftTop,
        Corner::LeftBottom,
        Corner::RightTop,
        Corner::RightBottom,
    ];

    /// Whether this chain lies on the right side of the hull.
    ///
    /// Right-side chains store x coordinates bit-flipped (`!x`).
    pub fn is_right(self) -> bool {
        matches!(self, Corner::RightTop | Corner::RightBottom)
    }

    /// Whether this chain runs along the bottom half of the hull.
    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::LeftBottom | Corner::RightBottom)
    }
}

/// A hull chain vertex in chain-local coordinates.
///
/// For right-side chains x is stored flipped (`!x` = `-x - 1`); apply `!`
/// again to recover the plane coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainPoint {
    /// Column, chain-local (flipped on right-side chains).
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// One convex, y-monotone hull chain: an ordered vertex list from the chain's
/// fixed head extreme to its terminal extreme.
///
/// Invariant after construction: vertex rows strictly increase and every
/// consecutive turn is strictly convex (collinear points are never retained).
#[derive(Clone, Debug, Default)]
pub struct Chain {
    pub(crate) top: i32,
    pub(crate) btm: i32,
    pub(crate) pts: Vec<ChainPoint>,
}

impl Chain {
    /// First row of the chain span.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Last row of the chain span.
    pub fn btm(&self) -> i32 {
        self.btm
    }

    /// Accepted vertices, chain-local coordinates.
    pub fn points(&self) -> &[ChainPoint] {
        &self.pts
    }

    pub(crate) fn reset(&mut self, top: i32, btm: i32, head_x: i32) {
        self.top = top;
        self.btm = btm;
        self.pts.clear();
        self.pts.push(ChainPoint { x: head_x, y: top });
    }

    /// The `i`-th vertex from the top of the stack (1 = most recent).
    pub(crate) fn peek(&self, i: usize) -> ChainPoint {
        self.pts[self.pts.len() - i]
    }

    pub(crate) fn push(&mut self, x: i32, y: i32) {
        self.pts.push(ChainPoint { x, y });
    }

    pub(crate) fn pop(&mut self) {
        self.pts.pop();
    }
}

/// The four hull chains, tagged by corner.
///
/// A fixed 4-element structure rather than a generic vertex list: the
/// offsetter's corner tie-in rules and the rasterizer's fill passes address
/// specific neighbor chains by name.
#[derive(Clone, Debug, Default)]
pub struct ChainSet {
    pub(crate) lt: Chain,
    pub(crate) lb: Chain,
    pub(crate) rt: Chain,
    pub(crate) rb: Chain,
}

impl ChainSet {
    /// Borrows the chain for a corner.
    pub fn get(&self, corner: Corner) -> &Chain {
        match corner {
            Corner::LeftTop => &self.lt,
            Corner::LeftBottom => &self.lb,
            Corner::RightTop => &self.rt,
            Corner::RightBottom => &self.rb,
        }
    }

    pub(crate) fn get_mut(&mut self, corner: Corner) -> &mut Chain {
        match corner {
            Corner::LeftTop => &mut self.lt,
            Corner::LeftBottom => &mut self.lb,
            Corner::RightTop => &mut self.rt,
            Corner::RightBottom => &mut self.rb,
        }
    }

    /// Seeds the four chain spans from the boundary scan summary, each with
    /// its fixed head vertex already pushed.
    pub(crate) fn init(&mut self, b: &BoundsSummary, left: &[i32], right: &[i32]) {
        self.lt.reset(b.top, b.l_min_top, left[b.top as usize]);
        self.lb.reset(b.l_min_btm, b.btm, left[b.l_min_btm as usize]);
        self.rt.reset(b.top, b.r_max_top, right[b.top as usize]);
        self.rb.reset(b.r_max_btm, b.btm, right[b.r_max_btm as usize]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hull/chain.rs"]
mod tests;
