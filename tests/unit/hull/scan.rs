use super::*;

fn diamond_mask() -> Vec<i16> {
    // 5x5 diamond of fully opaque samples.
    let mut data = vec![0i16; 25];
    for y in 0..5i32 {
        for x in 0..5i32 {
            if (x - 2).abs() + (y - 2).abs() <= 2 {
                data[(y * 5 + x) as usize] = 4096;
            }
        }
    }
    data
}

#[test]
fn per_row_boundaries_and_sentinels() {
    let mut data = diamond_mask();
    // Clear row 1 entirely to exercise the empty-row sentinels.
    for x in 0..5 {
        data[5 + x] = 0;
    }
    let plane = AlphaPlane::from_rows(&data, 5, 5).unwrap();
    let mut left = vec![0i32; 5];
    let mut right = vec![0i32; 5];
    let bounds = scan_bounds(&plane, 2047, &mut left, &mut right).unwrap();

    assert_eq!(left, vec![2, 5, 0, 1, 2]);
    assert_eq!(right, vec![flip(2), flip(-1), flip(4), flip(3), flip(2)]);
    assert_eq!((bounds.top, bounds.btm), (0, 4));
}

#[test]
fn extrema_and_their_row_ranges() {
    let data = diamond_mask();
    let plane = AlphaPlane::from_rows(&data, 5, 5).unwrap();
    let mut left = vec![0i32; 5];
    let mut right = vec![0i32; 5];
    let bounds = scan_bounds(&plane, 2047, &mut left, &mut right).unwrap();

    assert_eq!((bounds.top, bounds.btm), (0, 4));
    assert_eq!((bounds.l_min_top, bounds.l_min_btm), (2, 2));
    assert_eq!((bounds.r_max_top, bounds.r_max_btm), (2, 2));
}

#[test]
fn flat_edges_span_their_full_row_range() {
    // Fully opaque block: extrema attained on every row.
    let data = vec![4096i16; 12];
    let plane = AlphaPlane::from_rows(&data, 4, 3).unwrap();
    let mut left = vec![0i32; 3];
    let mut right = vec![0i32; 3];
    let bounds = scan_bounds(&plane, 0, &mut left, &mut right).unwrap();

    assert_eq!((bounds.l_min_top, bounds.l_min_btm), (0, 2));
    assert_eq!((bounds.r_max_top, bounds.r_max_btm), (0, 2));
}

#[test]
fn empty_mask_reports_none() {
    let data = vec![100i16; 16];
    let plane = AlphaPlane::from_rows(&data, 4, 4).unwrap();
    let mut left = vec![0i32; 4];
    let mut right = vec![0i32; 4];
    assert!(scan_bounds(&plane, 100, &mut left, &mut right).is_none());
    // Threshold comparison is strict: equal samples are transparent.
    assert!(scan_bounds(&plane, 99, &mut left, &mut right).is_some());
}

#[test]
fn strided_input_scans_the_right_channel() {
    // Interleaved quads with alpha in channel 0; other channels opaque-looking.
    let mut data = vec![4096i16; 3 * 2 * 4];
    for i in 0..6 {
        data[i * 4] = 0;
    }
    data[1 * 4] = 4096; // (x=1, y=0)
    let plane = AlphaPlane::new(&data, 3, 2, 4, 12).unwrap();
    let mut left = vec![0i32; 2];
    let mut right = vec![0i32; 2];
    let bounds = scan_bounds(&plane, 2047, &mut left, &mut right).unwrap();
    assert_eq!((bounds.top, bounds.btm), (0, 0));
    assert_eq!(left[0], 1);
    assert_eq!(right[0], flip(1));
}
