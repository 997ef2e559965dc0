//! Term annotation and cross-linking over plain text.
//!
//! Text goes in, a sequence of [`AnnotatedSpan`](modelscape_types::AnnotatedSpan)s
//! comes out. Concatenating the span texts always reproduces the input.
//!
//! ```text
//!   Glossary ──▶ TermAnnotator ─┐
//!                               ├──▶ SpanMatcher ──▶ Vec<AnnotatedSpan>
//!   &[Entity] ─▶ CrossLinker ───┘
//! ```
//!
//! Both annotators share [`SpanMatcher`]: longest needle first, whole words,
//! case-insensitive, no overlaps. They compose through the `*_spans`
//! methods, which only rescan plain spans:
//!
//! ```
//! use modelscape_annotate::{CrossLinker, TermAnnotator};
//! use modelscape_types::{Entity, Glossary, GlossaryEntry, concat_text};
//!
//! let glossary: Glossary = vec![GlossaryEntry::new("VLA", "Vision-language-action model")].into();
//! let entities = vec![Entity::new(1, "RT-2", "Jul 2023")];
//!
//! let text = "RT-2 is an early VLA.";
//! let spans = CrossLinker::new(&entities).link(text, None);
//! let spans = TermAnnotator::new(&glossary).annotate_spans(spans);
//!
//! assert_eq!(spans.iter().filter(|s| s.is_annotation()).count(), 2);
//! assert_eq!(concat_text(&spans), text);
//! ```

pub mod crosslink;
pub mod datasets;
pub mod glossary;
pub mod matcher;

pub use crosslink::{CrossLinker, link};
pub use datasets::{KNOWN_DATASETS, extract_datasets};
pub use glossary::{TermAnnotator, annotate, annotate_spans};
pub use matcher::{Candidate, MatchRules, SpanMatcher};
