//! Annotated text spans.
//!
//! An annotation pass turns a string into a sequence of spans that covers the
//! input exactly once, in order:
//!
//! ```text
//! "500 robot hours logged"
//!     ↓ annotate
//! [Span { text: "500 " },
//!  Span { text: "robot hours", annotation: glossary → "robot hours" },
//!  Span { text: " logged" }]
//! ```
//!
//! Concatenating the span texts gives back the input. Annotated spans are
//! opaque to later passes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// What an annotated span refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum AnnotationKind {
    /// A glossary term; `ref_id` is the term key.
    Glossary,
    /// A cross-reference to another entity; `ref_id` is the entity id.
    #[strum(serialize = "model-link", serialize = "link")]
    ModelLink,
}

impl AnnotationKind {
    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::Glossary => "glossary",
            AnnotationKind::ModelLink => "model-link",
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub ref_id: String,
}

/// One run of text, plain or annotated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
}

impl AnnotatedSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    pub fn annotated(text: impl Into<String>, kind: AnnotationKind, ref_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Some(Annotation {
                kind,
                ref_id: ref_id.into(),
            }),
        }
    }

    pub fn is_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    pub fn kind(&self) -> Option<AnnotationKind> {
        self.annotation.as_ref().map(|a| a.kind)
    }

    pub fn ref_id(&self) -> Option<&str> {
        self.annotation.as_ref().map(|a| a.ref_id.as_str())
    }
}

/// Reassemble the text a span sequence was cut from.
pub fn concat_text(spans: &[AnnotatedSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_aliases() {
        assert_eq!(AnnotationKind::from_str("Glossary"), Some(AnnotationKind::Glossary));
        assert_eq!(AnnotationKind::from_str("model-link"), Some(AnnotationKind::ModelLink));
        assert_eq!(AnnotationKind::from_str("link"), Some(AnnotationKind::ModelLink));
        assert_eq!(AnnotationKind::from_str("tooltip"), None);
    }

    #[test]
    fn plain_spans_serialize_without_annotation() {
        let json = serde_json::to_value(AnnotatedSpan::plain("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hi"}));

        let json = serde_json::to_value(AnnotatedSpan::annotated("RT-1", AnnotationKind::ModelLink, "4")).unwrap();
        assert_eq!(json["annotation"]["kind"], "model-link");
        assert_eq!(json["annotation"]["ref_id"], "4");
    }

    #[test]
    fn concat_reassembles() {
        let spans = vec![
            AnnotatedSpan::plain("500 "),
            AnnotatedSpan::annotated("robot hours", AnnotationKind::Glossary, "robot hours"),
            AnnotatedSpan::plain(" logged"),
        ];
        assert_eq!(concat_text(&spans), "500 robot hours logged");
        assert!(spans[1].is_annotation());
        assert_eq!(spans[1].ref_id(), Some("robot hours"));
        assert_eq!(spans[0].kind(), None);
    }
}
