//! Glossary term annotation.

use modelscape_types::{AnnotatedSpan, AnnotationKind, Glossary, GlossaryEntry};

use crate::matcher::{Candidate, MatchRules, SpanMatcher};

/// Wraps glossary terms found in text. Build once per glossary, reuse for
/// every text shown.
#[derive(Clone, Debug, Default)]
pub struct TermAnnotator {
    matcher: SpanMatcher,
}

impl TermAnnotator {
    pub fn new(glossary: &Glossary) -> Self {
        Self::from_entries(glossary.iter())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a GlossaryEntry>) -> Self {
        let candidates = entries
            .into_iter()
            .map(|e| Candidate::new(e.term.clone(), AnnotationKind::Glossary, e.key.clone()));
        let matcher = SpanMatcher::new(candidates, MatchRules::default());
        tracing::debug!(terms = matcher.len(), "term annotator ready");
        Self { matcher }
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Split `text` into plain and glossary spans. Each span's `ref_id` is
    /// the glossary key of the term it matched.
    pub fn annotate(&self, text: &str) -> Vec<AnnotatedSpan> {
        self.matcher.annotate(text)
    }

    /// Annotate the plain spans of an earlier pass (cross-links, or a
    /// previous glossary pass) without touching annotated ones.
    pub fn annotate_spans(&self, spans: Vec<AnnotatedSpan>) -> Vec<AnnotatedSpan> {
        self.matcher.annotate_spans_with(spans, |_| true)
    }
}

/// One-shot form of [`TermAnnotator::annotate`].
pub fn annotate(text: &str, glossary: &Glossary) -> Vec<AnnotatedSpan> {
    TermAnnotator::new(glossary).annotate(text)
}

/// One-shot form of [`TermAnnotator::annotate_spans`].
pub fn annotate_spans(spans: Vec<AnnotatedSpan>, glossary: &Glossary) -> Vec<AnnotatedSpan> {
    TermAnnotator::new(glossary).annotate_spans(spans)
}
