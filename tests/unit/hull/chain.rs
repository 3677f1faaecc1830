use super::*;

#[test]
fn corner_flags() {
    assert!(!Corner::LeftTop.is_right());
    assert!(!Corner::LeftTop.is_bottom());
    assert!(Corner::RightTop.is_right());
    assert!(Corner::LeftBottom.is_bottom());
    assert!(Corner::RightBottom.is_right() && Corner::RightBottom.is_bottom());
    assert_eq!(Corner::ALL.len(), 4);
}

#[test]
fn reset_seeds_the_head_vertex() {
    let mut chain = Chain::default();
    chain.reset(3, 9, 42);
    assert_eq!(chain.top(), 3);
    assert_eq!(chain.btm(), 9);
    assert_eq!(chain.points(), &[ChainPoint { x: 42, y: 3 }]);
}

#[test]
fn stack_discipline() {
    let mut chain = Chain::default();
    chain.reset(0, 5, 10);
    chain.push(7, 2);
    chain.push(5, 4);
    assert_eq!(chain.peek(1), ChainPoint { x: 5, y: 4 });
    assert_eq!(chain.peek(2), ChainPoint { x: 7, y: 2 });
    chain.pop();
    assert_eq!(chain.peek(1), ChainPoint { x: 7, y: 2 });
    assert_eq!(chain.points().len(), 2);
}

#[test]
fn init_assigns_the_four_spans() {
    let bounds = BoundsSummary {
        top: 0,
        btm: 4,
        l_min_top: 2,
        l_min_btm: 2,
        r_max_top: 2,
        r_max_btm: 2,
    };
    let left = [2, 1, 0, 1, 2];
    let right = [-3, -4, -5, -4, -3];
    let mut chains = ChainSet::default();
    chains.init(&bounds, &left, &right);

    let lt = chains.get(Corner::LeftTop);
    assert_eq!((lt.top(), lt.btm()), (0, 2));
    assert_eq!(lt.points(), &[ChainPoint { x: 2, y: 0 }]);

    let lb = chains.get(Corner::LeftBottom);
    assert_eq!((lb.top(), lb.btm()), (2, 4));
    assert_eq!(lb.points(), &[ChainPoint { x: 0, y: 2 }]);

    let rt = chains.get(Corner::RightTop);
    assert_eq!((rt.top(), rt.btm()), (0, 2));
    assert_eq!(rt.points(), &[ChainPoint { x: -3, y: 0 }]);

    let rb = chains.get(Corner::RightBottom);
    assert_eq!((rb.top(), rb.btm()), (2, 4));
    assert_eq!(rb.points(), &[ChainPoint { x: -5, y: 2 }]);
}
