//! Resolving every directive of a document at one point in time.

use crate::{
    foundation::error::GlintResult,
    smil::directive::{AnimationDirective, DirectiveTag},
    svg::doc::{Element, Node, SvgDocument},
};

/// Textual markers for [`is_animated`].
const DIRECTIVE_MARKERS: [&str; 2] = ["<animate", "<animateTransform"];

/// Cheap syntactic check for animation directives.
///
/// This is a substring test, not a parse: directive-looking text inside comments or CDATA also
/// counts, and so does any tag starting with `<animate`.
pub fn is_animated(source: &str) -> bool {
    DIRECTIVE_MARKERS.iter().any(|m| source.contains(m))
}

/// Counts from one [`apply_animations`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Directives whose value was written to their parent.
    pub applied: usize,
    /// Directives dropped because a parameter was missing or malformed.
    pub skipped: usize,
}

/// Parse `source`, resolve all directives at `time_secs`, and serialize the static result.
///
/// The source is re-parsed on every call so no state leaks between frames.
#[tracing::instrument(level = "trace", skip(source))]
pub fn apply_animations_at_time(source: &str, time_secs: f64) -> GlintResult<String> {
    let mut doc = SvgDocument::parse(source)?;
    apply_animations(&mut doc, time_secs);
    Ok(doc.to_markup())
}

/// Resolve all directives of `doc` in place at `time_secs`.
///
/// Each directive writes its value to its parent element and is then detached. Directives with
/// missing or malformed parameters are detached too, leaving the parent's static attributes in
/// effect. A directive that is the document element itself has no parent and is left alone.
pub fn apply_animations(doc: &mut SvgDocument, time_secs: f64) -> ApplyStats {
    let mut stats = ApplyStats::default();
    for tag in DirectiveTag::ALL {
        resolve_children(doc.root_mut(), tag, time_secs, &mut stats);
    }
    stats
}

fn resolve_children(
    parent: &mut Element,
    tag: DirectiveTag,
    time_secs: f64,
    stats: &mut ApplyStats,
) {
    let mut i = 0;
    while i < parent.children().len() {
        let directive = match &parent.children()[i] {
            Node::Element(child)
                if DirectiveTag::from_local_name(child.local_name()) == Some(tag) =>
            {
                Some(AnimationDirective::from_element(child))
            }
            _ => None,
        };

        match directive {
            Some(Ok(directive)) => {
                parent.remove_child(i);
                directive.apply_to(parent, time_secs);
                stats.applied += 1;
            }
            Some(Err(reason)) => {
                tracing::debug!(parent = parent.name(), %reason, "skipping animation directive");
                parent.remove_child(i);
                stats.skipped += 1;
            }
            None => {
                if let Some(Node::Element(child)) = parent.children_mut().get_mut(i) {
                    resolve_children(child, tag, time_secs, stats);
                }
                i += 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/smil/apply.rs"]
mod tests;
