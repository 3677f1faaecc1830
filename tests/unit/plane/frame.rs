use super::*;

#[test]
fn from_parts_validates_channel_sizes() {
    assert!(Frame::from_parts(2, 2, vec![Rgb8::default(); 4], vec![0; 4]).is_ok());
    assert!(Frame::from_parts(2, 2, vec![Rgb8::default(); 3], vec![0; 4]).is_err());
    assert!(Frame::from_parts(2, 2, vec![Rgb8::default(); 4], vec![0; 5]).is_err());
    assert!(Frame::from_parts(0, 2, vec![], vec![]).is_err());
}

#[test]
fn set_pixel_shows_through_the_alpha_plane() {
    let mut frame = Frame::new(3, 2).unwrap();
    frame.set_pixel(2, 1, Rgb8 { r: 9, g: 8, b: 7 }, 4096);
    assert_eq!(frame.alpha_plane().sample(2, 1), 4096);
    assert_eq!(frame.alpha_plane().sample(0, 0), 0);
    assert_eq!(frame.color()[5], Rgb8 { r: 9, g: 8, b: 7 });
}

#[test]
fn pattern_wraps_with_phase() {
    let color: Vec<Rgb8> = (0..4)
        .map(|i| Rgb8 {
            r: i as u8,
            g: 0,
            b: 0,
        })
        .collect();
    let alpha = vec![4096i16; 4];
    let pat = TilePattern::new(2, 2, color, alpha, 1, 0).unwrap();
    // Phase 1 along x: sample(0, 0) reads pattern column 1.
    assert_eq!(pat.sample(0, 0).0.r, 1);
    assert_eq!(pat.sample(1, 0).0.r, 0);
    assert_eq!(pat.sample(3, 1).0.r, 2);
}

#[test]
fn pattern_accepts_negative_phase() {
    let color = vec![Rgb8::default(); 6];
    let alpha: Vec<i16> = (0..6).collect();
    let pat = TilePattern::new(3, 2, color, alpha, -1, -1).unwrap();
    // -1 ≡ 2 (mod 3) along x, -1 ≡ 1 (mod 2) along y.
    assert_eq!(pat.sample(0, 0).1, 5);
}
