use huekit_core::meaning::Tone;
use huekit_core::{generate, ColorError, Interpreter, MeaningTable};

#[test]
fn red_complement_is_cyan() {
    let i = Interpreter::default();
    let set = generate(&i, "#FF0000").unwrap();
    assert_eq!(set.complementary.hex, "#00ffff");
    assert_eq!(set.analogous[0].hex, "#ff7f00");
    assert_eq!(set.analogous[1].hex, "#ff007f");
    assert_eq!(set.triadic[0].hex, "#00ff00");
    assert_eq!(set.triadic[1].hex, "#0000ff");
}

#[test]
fn every_member_is_annotated() {
    let i = Interpreter::default();
    let set = generate(&i, "ff0000").unwrap();
    // All keep s=100 / l=50, so the saturation rule fires for each.
    for item in std::iter::once(&set.complementary)
        .chain(set.analogous.iter())
        .chain(set.triadic.iter())
    {
        assert_eq!(item.meaning, Tone::Saturated.message());
    }
}

#[test]
fn derived_colors_consult_the_table() {
    let table = MeaningTable::from_pairs([("00FFFF", "Aqua. Clarity and calm.")]);
    let set = generate(&Interpreter::new(table), "#ff0000").unwrap();
    assert_eq!(set.complementary.meaning, "Aqua. Clarity and calm.");
}

#[test]
fn gray_base_stays_gray() {
    let set = generate(&Interpreter::default(), "#808080").unwrap();
    assert_eq!(set.complementary.hex, "#7f7f7f");
    assert_eq!(set.triadic[1].hex, "#7f7f7f");
}

#[test]
fn invalid_base_is_rejected() {
    let i = Interpreter::default();
    assert_eq!(generate(&i, "12345"), Err(ColorError::InvalidColor("12345".into())));
    assert_eq!(generate(&i, "GGGGGG"), Err(ColorError::InvalidColor("GGGGGG".into())));
}

#[test]
fn serializes_with_api_field_names() {
    let set = generate(&Interpreter::default(), "#FF0000").unwrap();
    let v = serde_json::to_value(&set).unwrap();
    assert_eq!(v["complementary"]["hex"], "#00ffff");
    assert_eq!(v["analogous"].as_array().unwrap().len(), 2);
    assert_eq!(v["triadic"].as_array().unwrap().len(), 2);
}
