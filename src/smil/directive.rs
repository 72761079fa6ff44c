//! Reading animation directives (`<animate>`, `<animateTransform>`) off document elements.

use crate::{
    smil::{
        interp::{RepeatPolicy, interpolate},
        time::{parse_begin, parse_duration},
    },
    svg::doc::Element,
};

/// Directive element tags understood by the compositor, in resolution order.
///
/// All `animate` directives of a document are resolved before any `animateTransform`, so a
/// transform directive wins over an `animate` that targets `transform` on the same element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveTag {
    /// `<animate>`: writes the value to the named attribute.
    Animate,
    /// `<animateTransform>`: writes `type(value)` to `transform`.
    AnimateTransform,
}

impl DirectiveTag {
    /// Every tag, in resolution order.
    pub const ALL: [Self; 2] = [Self::Animate, Self::AnimateTransform];

    /// Element local name for this tag.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Animate => "animate",
            Self::AnimateTransform => "animateTransform",
        }
    }

    /// Classify an element by local name.
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag_name() == name)
    }
}

/// Where a resolved value is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Write the value straight to `target_attribute`.
    Direct,
    /// Overwrite `transform` with `{transform_type}({value})`.
    Transform {
        /// Transform function name, `translate` unless the directive says otherwise.
        transform_type: String,
    },
}

/// One animation directive, parsed from a single directive element.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDirective {
    /// Attribute named by `attributeName`.
    pub target_attribute: String,
    /// Keyframes from `values`, split on `;` and trimmed. Never empty.
    pub values: Vec<String>,
    /// Cycle length in seconds, always finite and > 0.
    pub dur_secs: f64,
    /// Start offset in seconds, always finite.
    pub begin_secs: f64,
    /// Cycle count.
    pub repeat: RepeatPolicy,
    /// Raw `fill` attribute. Read but not interpreted: finished animations always freeze.
    pub fill: Option<String>,
    /// How the value is written to the parent element.
    pub kind: DirectiveKind,
}

/// Why a directive element was ignored.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The element is not a directive tag.
    #[error("element <{0}> is not an animation directive")]
    NotADirective(String),
    /// A required attribute is absent or blank.
    #[error("missing required attribute '{0}'")]
    MissingAttribute(&'static str),
    /// `dur` did not parse to a positive number of seconds.
    #[error("invalid dur '{0}'")]
    InvalidDuration(String),
    /// `begin` did not parse to a number of seconds.
    #[error("invalid begin '{0}'")]
    InvalidBegin(String),
}

impl AnimationDirective {
    /// Read directive parameters from an element.
    pub fn from_element(el: &Element) -> Result<Self, SkipReason> {
        let tag = DirectiveTag::from_local_name(el.local_name())
            .ok_or_else(|| SkipReason::NotADirective(el.name().to_owned()))?;

        let required = |name: &'static str| {
            el.attr(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(SkipReason::MissingAttribute(name))
        };
        let target_attribute = required("attributeName")?.trim().to_owned();
        let values = required("values")?
            .split(';')
            .map(|v| v.trim().to_owned())
            .collect::<Vec<_>>();
        let dur = required("dur")?;

        let dur_secs = parse_duration(dur);
        if !(dur_secs.is_finite() && dur_secs > 0.0) {
            return Err(SkipReason::InvalidDuration(dur.to_owned()));
        }
        let begin = el.attr("begin");
        let begin_secs = parse_begin(begin);
        if !begin_secs.is_finite() {
            return Err(SkipReason::InvalidBegin(begin.unwrap_or_default().to_owned()));
        }

        let kind = match tag {
            DirectiveTag::Animate => DirectiveKind::Direct,
            DirectiveTag::AnimateTransform => DirectiveKind::Transform {
                transform_type: el
                    .attr("type")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .unwrap_or("translate")
                    .to_owned(),
            },
        };

        Ok(Self {
            target_attribute,
            values,
            dur_secs,
            begin_secs,
            repeat: RepeatPolicy::parse(el.attr("repeatCount")),
            fill: el.attr("fill").map(str::to_owned),
            kind,
        })
    }

    /// The value this directive produces at global time `time_secs`.
    pub fn value_at(&self, time_secs: f64) -> String {
        interpolate(
            &self.values,
            self.dur_secs,
            self.begin_secs,
            time_secs,
            self.repeat,
        )
    }

    /// Write this directive's value at `time_secs` onto `target` (the directive's parent).
    pub fn apply_to(&self, target: &mut Element, time_secs: f64) {
        let value = self.value_at(time_secs);
        match &self.kind {
            DirectiveKind::Direct => target.set_attr(&self.target_attribute, value),
            DirectiveKind::Transform { transform_type } => {
                target.set_attr("transform", format!("{transform_type}({value})"));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/smil/directive.rs"]
mod tests;
