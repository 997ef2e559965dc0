//! Subcommand bodies. Each takes loaded inputs and returns something to
//! print as JSON; argument parsing and file loading stay in `main`.

use modelscape_annotate::{CrossLinker, TermAnnotator, extract_datasets};
use modelscape_timeline::{CatalogStats, TimelineConfig, TimelineLayoutEngine, distinct_categories, distinct_orgs};
use modelscape_types::{AnnotatedSpan, Entity, EntityId, Glossary, LayoutResult};
use serde::Serialize;

use crate::query::Query;

/// Lay out the entities that pass `query`.
pub fn layout(entities: &[Entity], config: TimelineConfig, query: &Query, width: f64) -> LayoutResult {
    let engine = TimelineLayoutEngine::new(config);
    let visible = query.apply(entities, engine.dates());
    engine.layout(&visible, width)
}

/// Glossary annotation, optionally after cross-linking against `entities`.
pub fn annotate(
    text: &str,
    glossary: &Glossary,
    entities: Option<&[Entity]>,
    current: Option<&EntityId>,
) -> Vec<AnnotatedSpan> {
    let annotator = TermAnnotator::new(glossary);
    match entities {
        Some(entities) => annotator.annotate_spans(CrossLinker::new(entities).link(text, current)),
        None => annotator.annotate(text),
    }
}

pub fn link(text: &str, entities: &[Entity], current: Option<&EntityId>) -> Vec<AnnotatedSpan> {
    CrossLinker::new(entities).link(text, current)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogSummary {
    #[serde(flatten)]
    pub stats: CatalogStats,
    pub orgs: Vec<String>,
    pub categories: Vec<String>,
}

pub fn stats(entities: &[Entity]) -> CatalogSummary {
    CatalogSummary {
        stats: CatalogStats::from_entities(entities),
        orgs: distinct_orgs(entities),
        categories: distinct_categories(entities),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityDatasets {
    pub id: EntityId,
    pub name: String,
    pub datasets: Vec<&'static str>,
}

/// Known datasets per entity, from each entity's `data_sources` field.
/// Entities that name none are left out.
pub fn datasets(entities: &[Entity]) -> Vec<EntityDatasets> {
    entities
        .iter()
        .filter_map(|e| {
            let found = extract_datasets(&e.field("data_sources")?);
            (!found.is_empty()).then(|| EntityDatasets {
                id: e.id.clone(),
                name: e.name.clone(),
                datasets: found,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelscape_types::{AnnotationKind, GlossaryEntry};

    fn catalog() -> Vec<Entity> {
        vec![
            Entity::new(1, "RT-1", "Dec 2022")
                .with_org("Google")
                .with_field("data_sources", "130k episodes on Google Robot"),
            Entity::new(2, "RT-2", "Jul 2023")
                .with_org("Google DeepMind")
                .with_field("data_sources", "RT-1 data plus web VQA"),
            Entity::new(3, "Octo", "May 2024")
                .with_org("UC Berkeley")
                .with_field("data_sources", "N/A"),
        ]
    }

    #[test]
    fn layout_honours_the_query() {
        let query = Query {
            org: Some("Google".into()),
            ..Query::default()
        };
        let result = layout(&catalog(), TimelineConfig::default(), &query, 1200.0);
        assert_eq!(result.markers.len(), 1);
        assert_eq!(result.markers[0].entity_id, EntityId::from(1));
    }

    #[test]
    fn annotate_links_before_glossary() {
        let glossary: Glossary = vec![GlossaryEntry::new("RT-1", "Robotics Transformer 1")].into();
        let entities = catalog();
        let current = EntityId::from(2);

        let spans = annotate("RT-2 extends RT-1", &glossary, Some(&entities), Some(&current));
        let last = spans.last().unwrap();
        assert_eq!(last.kind(), Some(AnnotationKind::ModelLink));

        let spans = annotate("RT-2 extends RT-1", &glossary, None, None);
        assert_eq!(spans.last().unwrap().kind(), Some(AnnotationKind::Glossary));
    }

    #[test]
    fn datasets_skip_entities_without_hits() {
        let found = datasets(&catalog());
        let ids: Vec<_> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(found[0].datasets, vec!["Google Robot"]);
        assert_eq!(found[1].datasets, vec!["RT-1"]);
    }

    #[test]
    fn stats_flatten_into_one_object() {
        let value = serde_json::to_value(stats(&catalog())).unwrap();
        assert_eq!(value["total_entities"], 3);
        assert_eq!(value["orgs"].as_array().unwrap().len(), 3);
    }
}
