use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlintError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(GlintError::render("x").to_string().contains("render error:"));
    assert!(GlintError::encode("x").to_string().contains("encode error:"));
    assert!(GlintError::push("x").to_string().contains("push error:"));
    assert!(
        GlintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
