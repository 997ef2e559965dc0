//! Cross-linking entity names mentioned in free text.

use modelscape_types::{AnnotatedSpan, AnnotationKind, Entity, EntityId};

use crate::matcher::{Candidate, MatchRules, SpanMatcher};

/// Links mentions of other entities by name.
///
/// The entity being viewed is left out of the scan entirely, so it never
/// links to itself and shorter sibling names (`"RT"` inside `"RT-2"`) still
/// match within its name.
#[derive(Clone, Debug, Default)]
pub struct CrossLinker {
    matcher: SpanMatcher,
}

impl CrossLinker {
    pub fn new(entities: &[Entity]) -> Self {
        let candidates = entities
            .iter()
            .map(|e| Candidate::new(e.name.clone(), AnnotationKind::ModelLink, e.id.as_str()));
        let rules = MatchRules {
            reject_decimal_suffix: true,
        };
        let matcher = SpanMatcher::new(candidates, rules);
        tracing::debug!(names = matcher.len(), "cross-linker ready");
        Self { matcher }
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Split `text` into plain spans and links. Each link's `ref_id` is the
    /// target entity's id.
    pub fn link(&self, text: &str, current: Option<&EntityId>) -> Vec<AnnotatedSpan> {
        self.matcher.annotate_with(text, |c| !is_current(c, current))
    }

    /// Link inside the plain spans of an earlier pass.
    pub fn link_spans(&self, spans: Vec<AnnotatedSpan>, current: Option<&EntityId>) -> Vec<AnnotatedSpan> {
        self.matcher.annotate_spans_with(spans, |c| !is_current(c, current))
    }
}

fn is_current(candidate: &Candidate, current: Option<&EntityId>) -> bool {
    current.is_some_and(|id| id.as_str() == candidate.ref_id)
}

/// One-shot form of [`CrossLinker::link`].
pub fn link(text: &str, entities: &[Entity], current: Option<&EntityId>) -> Vec<AnnotatedSpan> {
    CrossLinker::new(entities).link(text, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelscape_types::concat_text;

    fn catalog() -> Vec<Entity> {
        vec![
            Entity::new(1, "RT-1", "Dec 2022"),
            Entity::new(2, "RT-2", "Jul 2023"),
            Entity::new(3, "RT", "Jan 2022"),
            Entity::new(4, "GR00T N1", "Mar 2025"),
            Entity::new(5, "N1", "Mar 2025"),
            Entity::new(6, "OpenVLA", "Jun 2024"),
        ]
    }

    fn links(spans: &[AnnotatedSpan]) -> Vec<(&str, &str)> {
        spans
            .iter()
            .filter(|s| s.is_annotation())
            .map(|s| (s.text.as_str(), s.ref_id().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn links_others_but_not_self() {
        let entities = catalog();
        let current = EntityId::from(2);
        let text = "RT-2 builds on RT-1.";
        let spans = link(text, &entities, Some(&current));
        // "RT-2" itself is out of the scan, so its "RT" prefix links to entity 3.
        assert_eq!(links(&spans), vec![("RT", "3"), ("RT-1", "1")]);
        assert!(links(&spans).iter().all(|(_, id)| *id != "2"));
        assert_eq!(concat_text(&spans), text);
        assert!(spans.iter().all(|s| s.kind() != Some(AnnotationKind::Glossary)));
    }

    #[test]
    fn shorter_names_match_inside_own_name() {
        let entities = vec![Entity::new(2, "RT-2", "Jul 2023"), Entity::new(3, "RT", "Jan 2022")];
        let current = EntityId::from(2);
        let spans = link("RT-2 and RT", &entities, Some(&current));
        assert_eq!(links(&spans), vec![("RT", "3"), ("RT", "3")]);
        assert_eq!(spans[1], AnnotatedSpan::plain("-2 and "));
        assert_eq!(concat_text(&spans), "RT-2 and RT");
    }

    #[test]
    fn decimal_variants_are_not_prefix_matched() {
        let entities = catalog();
        let spans = link("N1.5 improves on N1", &entities, None);
        assert_eq!(links(&spans), vec![("N1", "5")]);
        assert_eq!(spans[0].text, "N1.5 improves on ");
    }

    #[test]
    fn longer_name_claims_first() {
        let entities = catalog();
        let spans = link("Compared with GR00T N1 and openvla", &entities, None);
        assert_eq!(links(&spans), vec![("GR00T N1", "4"), ("openvla", "6")]);
    }

    #[test]
    fn no_current_links_everything() {
        let entities = catalog();
        let spans = link("RT-2 builds on RT-1.", &entities, None);
        assert_eq!(links(&spans), vec![("RT-2", "2"), ("RT-1", "1")]);
    }

    #[test]
    fn link_spans_leaves_existing_annotations() {
        let linker = CrossLinker::new(&catalog());
        let spans = vec![
            AnnotatedSpan::annotated("RT-1", AnnotationKind::Glossary, "rt-1"),
            AnnotatedSpan::plain(" vs OpenVLA"),
        ];
        let out = linker.link_spans(spans, None);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].kind(), Some(AnnotationKind::Glossary));
        assert_eq!(out[2].ref_id(), Some("6"));
    }
}
