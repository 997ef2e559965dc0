//! Shared entity, glossary, span, and layout types for modelscape.
//!
//! This crate is the vocabulary the engines speak: catalog entities, glossary
//! entries, annotated text spans, and the layout descriptor handed to a
//! renderer. It has **no internal modelscape dependencies**; it is the leaf
//! crate that the timeline and annotation crates build on.
//!
//! # Data Flow
//!
//! ```text
//! Entity (EntityId, name, "Mon Year" date, org, category, fields)
//!     └── timeline engine  → LayoutResult (markers, labels, eras, ticks)
//!     └── cross-linker     → AnnotatedSpan (model-link → EntityId)
//!
//! GlossaryEntry (key, term, definition)
//!     └── term annotator   → AnnotatedSpan (glossary → key)
//! ```
//!
//! # Key Types
//!
//! |--------------------|-----------------------------------------------|
//! | Type               | Purpose                                       |
//! |--------------------|-----------------------------------------------|
//! | [`EntityId`]       | Stable entity identifier (string or numeric)  |
//! | [`Entity`]         | One catalog record, immutable per pass        |
//! | [`Glossary`]       | Case-insensitive term table                   |
//! | [`AnnotatedSpan`]  | One run of text, plain or annotated           |
//! | [`EraSegment`]     | Named date range (static configuration)       |
//! | [`LayoutResult`]   | Positioned markers, labels, bands, ticks      |
//! |--------------------|-----------------------------------------------|

pub mod entity;
pub mod fields;
pub mod glossary;
pub mod ids;
pub mod layout;
pub mod span;

// Re-export primary types at crate root for convenience.
pub use entity::Entity;
pub use fields::{AccessLabel, AccessLevel, access_label, format_number, has_value};
pub use glossary::{Glossary, GlossaryEntry};
pub use ids::EntityId;
pub use layout::{EraBand, EraSegment, LabelFootprint, LayoutResult, Marker, YearTick};
pub use span::{AnnotatedSpan, Annotation, AnnotationKind, concat_text};
