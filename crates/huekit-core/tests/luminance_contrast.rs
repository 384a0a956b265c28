use huekit_core::color::relative_luminance;
use huekit_core::{contrast, Color, ColorError};

#[test]
fn luminance_of_white_and_black() {
    let white = relative_luminance(Color::parse("#FFFFFF").unwrap());
    let black = relative_luminance(Color::parse("#000000").unwrap());
    assert!((white - 1.0).abs() < 1e-9);
    assert!(black.abs() < 1e-12);
}

#[test]
fn black_on_white_is_21() {
    let r = contrast("#000000", "#FFFFFF").unwrap();
    assert_eq!(r.ratio, 21.0);
    assert!(r.aa_large && r.aa && r.aaa);
}

#[test]
fn order_does_not_matter() {
    let a = contrast("#ff0000", "#ffffff").unwrap();
    let b = contrast("#ffffff", "#ff0000").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ratio, 4.0);
    assert!(a.aa_large);
    assert!(!a.aa);
}

#[test]
fn same_color_is_one() {
    let r = contrast("777777", "777777").unwrap();
    assert_eq!(r.ratio, 1.0);
    assert!(!r.aa_large);
}

#[test]
fn mid_gray_on_white() {
    let r = contrast("#767676", "#ffffff").unwrap();
    assert_eq!(r.ratio, 4.54);
    assert!(r.aa);
    assert!(!r.aaa);
}

#[test]
fn each_side_is_validated() {
    assert_eq!(
        contrast("12345", "#ffffff"),
        Err(ColorError::InvalidColor("12345".into()))
    );
    assert_eq!(
        contrast("#000000", "GGGGGG"),
        Err(ColorError::InvalidColor("GGGGGG".into()))
    );
}
