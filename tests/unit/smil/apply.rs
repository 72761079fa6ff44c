use super::*;

const BLINK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 32"><g id="left"><rect x="8" y="10" width="16" height="12"><animate attributeName="height" values="12;2;12" dur="2s" repeatCount="indefinite"/></rect></g><circle cx="48" cy="16" r="4"><animateTransform attributeName="transform" type="translate" values="0,0;4,0" dur="1s"/></circle></svg>"#;

fn element<'a>(doc: &'a SvgDocument, name: &str) -> &'a Element {
    doc.elements_named(name).into_iter().next().unwrap()
}

#[test]
fn resolves_values_and_strips_directives() {
    let out = apply_animations_at_time(BLINK, 0.5).unwrap();
    assert!(!out.contains("<animate"));
    let doc = SvgDocument::parse(&out).unwrap();
    assert_eq!(element(&doc, "rect").attr("height"), Some("7"));
    assert_eq!(
        element(&doc, "circle").attr("transform"),
        Some("translate(2,0)")
    );
}

#[test]
fn each_call_starts_from_the_source() {
    let at_zero = apply_animations_at_time(BLINK, 0.0).unwrap();
    let at_one = apply_animations_at_time(BLINK, 1.0).unwrap();
    let again = apply_animations_at_time(BLINK, 0.0).unwrap();
    assert_ne!(at_zero, at_one);
    assert_eq!(at_zero, again);
    let doc = SvgDocument::parse(&at_one).unwrap();
    assert_eq!(element(&doc, "rect").attr("height"), Some("2"));
}

#[test]
fn transform_directive_overwrites_static_transform() {
    let src = r#"<svg><g transform="scale(3)"><animateTransform attributeName="transform" type="rotate" values="0;90" dur="1s"/></g></svg>"#;
    let doc = SvgDocument::parse(&apply_animations_at_time(src, 0.5).unwrap()).unwrap();
    assert_eq!(element(&doc, "g").attr("transform"), Some("rotate(45)"));
}

#[test]
fn animate_transform_resolves_after_animate() {
    let src = r#"<svg><g><animateTransform attributeName="transform" values="1;1" dur="1s"/><animate attributeName="transform" values="scale(2);scale(2)" dur="1s"/></g></svg>"#;
    let doc = SvgDocument::parse(&apply_animations_at_time(src, 0.2).unwrap()).unwrap();
    assert_eq!(element(&doc, "g").attr("transform"), Some("translate(1)"));
}

#[test]
fn later_sibling_wins_for_same_attribute() {
    let src = r#"<svg><rect><animate attributeName="x" values="1;1" dur="1s"/><animate attributeName="x" values="7;7" dur="1s"/></rect></svg>"#;
    let doc = SvgDocument::parse(&apply_animations_at_time(src, 0.2).unwrap()).unwrap();
    assert_eq!(element(&doc, "rect").attr("x"), Some("7"));
}

#[test]
fn malformed_directives_are_dropped_and_static_value_kept() {
    let src = r#"<svg><rect x="3"><animate attributeName="x" dur="1s"/><animate attributeName="x" values="1;2" dur="never"/></rect></svg>"#;
    let mut doc = SvgDocument::parse(src).unwrap();
    let stats = apply_animations(&mut doc, 0.5);
    assert_eq!(
        stats,
        ApplyStats {
            applied: 0,
            skipped: 2
        }
    );
    assert_eq!(element(&doc, "rect").attr("x"), Some("3"));
    assert!(!doc.to_markup().contains("<animate"));
}

#[test]
fn deeply_nested_directives_are_found() {
    let src = r#"<svg><g><g><g><rect><animate attributeName="opacity" values="0;1" dur="4s"/></rect></g></g></g></svg>"#;
    let mut doc = SvgDocument::parse(src).unwrap();
    let stats = apply_animations(&mut doc, 1.0);
    assert_eq!(stats.applied, 1);
    assert_eq!(element(&doc, "rect").attr("opacity"), Some("0.25"));
}

#[test]
fn invalid_document_is_an_error() {
    assert!(apply_animations_at_time("<svg><animate", 0.0).is_err());
}

#[test]
fn detects_directive_markers() {
    assert!(is_animated(BLINK));
    assert!(is_animated("<svg><animate/></svg>"));
    assert!(is_animated("<svg><g><animateTransform/></g></svg>"));
    assert!(!is_animated("<svg><rect/></svg>"));
    assert!(!is_animated("<svg><set attributeName=\"x\" to=\"1\"/></svg>"));
}
