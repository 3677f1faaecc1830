use super::*;

#[test]
fn construction_seeds_state_with_the_numerator() {
    let pw = PixelWalker::new(3, 7);
    assert_eq!(pw.state, 3);
}

#[test]
fn fill_rate_matches_the_closed_forms() {
    // Top corner cut (s >= d, s >= n): 1 - (n+d-s)^2 / (2nd).
    assert_eq!(PixelWalker::new(2, 2).fill_rate(), 2048);
    let mut pw = PixelWalker::new(2, 2);
    pw.move_right(); // s = 4, a = 0
    assert_eq!(pw.fill_rate(), 4096);

    // Top/bottom crossing (s < d, s >= n): (s - n/2) / d.
    assert_eq!(PixelWalker::new(3, 6).fill_rate(), 1024);

    // Side crossing (s >= d, s < n): (s - d/2) / n.
    let mut pw = PixelWalker::new(6, 3);
    pw.move_up(); // s = 3
    assert_eq!(pw.fill_rate(), 1024);

    // Bottom corner cut (s < n, s < d): s^2 / (2nd).
    let mut pw = PixelWalker::new(3, 2);
    pw.move_up(); // s = 1
    assert_eq!(pw.fill_rate(), 4096 / 12);
}

#[test]
fn coverage_stays_bounded_and_decreases_within_a_row() {
    // Walk a 3-across, 5-down edge exactly like the anti-aliased rasterizer.
    let mut pw = PixelWalker::new(3, 5);
    for _ in 0..5 {
        let mut prev = i16::MAX;
        loop {
            let f = pw.fill_rate();
            assert!((0..=4096).contains(&f));
            assert!(f <= prev, "coverage must not grow while crossing columns");
            prev = f;
            if !pw.is_next_up() {
                break;
            }
            pw.move_up();
        }
        pw.move_right();
    }
}

#[test]
fn move_to_top_consumes_whole_columns() {
    let mut pw = PixelWalker::new(5, 2); // s = 5
    assert_eq!(pw.move_to_top(), 2); // (5-1)/2
    assert_eq!(pw.state, 1); // remainder + 1
}

#[test]
fn adjust_fullness_steps_only_full_cells() {
    let mut pw = PixelWalker::new(1, 1); // s = 1 < n + d
    assert!(!pw.adjust_fullness());
    pw.move_right(); // s = 2 = n + d
    assert!(pw.adjust_fullness());
    assert_eq!(pw.state, 1);
}

#[test]
fn is_next_up_compares_against_the_denominator() {
    let mut pw = PixelWalker::new(3, 2); // s = 3 > d
    assert!(pw.is_next_up());
    pw.move_up(); // s = 1
    assert!(!pw.is_next_up());
}
