use super::*;

#[test]
fn duration_units() {
    assert_eq!(parse_duration("2s"), 2.0);
    assert_eq!(parse_duration("300ms"), 0.3);
    assert_eq!(parse_duration("1.5"), 1.5);
    assert_eq!(parse_duration(" 4s "), 4.0);
}

#[test]
fn malformed_duration_is_nan() {
    assert!(parse_duration("").is_nan());
    assert!(parse_duration("abc").is_nan());
    assert!(parse_duration("indefinite").is_nan());
    assert!(parse_duration("2min").is_nan());
    assert!(parse_duration("infs").is_nan());
}

#[test]
fn begin_defaults_to_zero() {
    assert_eq!(parse_begin(None), 0.0);
    assert_eq!(parse_begin(Some("")), 0.0);
    assert_eq!(parse_begin(Some("  ")), 0.0);
}

#[test]
fn begin_uses_first_list_entry() {
    assert_eq!(parse_begin(Some("1s")), 1.0);
    assert_eq!(parse_begin(Some("0.5s;3s")), 0.5);
    assert_eq!(parse_begin(Some("250ms; 2s")), 0.25);
    assert_eq!(parse_begin(Some(";2s")), 0.0);
}

#[test]
fn begin_malformed_is_nan() {
    assert!(parse_begin(Some("click")).is_nan());
    assert!(parse_begin(Some("rect.click;1s")).is_nan());
}
