//! Catalog filtering and ordering.

use std::cmp::Ordering;

use clap::ValueEnum;
use modelscape_timeline::DateIndex;
use modelscape_types::{Entity, EntityId};

/// Free-form columns searched alongside name, org, category and date.
pub const SEARCHABLE_FIELDS: &[&str] = &[
    "opensource",
    "backbone",
    "params",
    "decoder",
    "speed",
    "about",
    "data_sources",
    "data_notes",
    "insight",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// A filtered, sorted view over the catalog.
#[derive(Clone, Debug, Default)]
pub struct Query {
    /// Exact organization; matches any member of a comma-separated org list.
    pub org: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Case-insensitive substring over the searchable fields.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl Query {
    pub fn matches(&self, entity: &Entity) -> bool {
        if let Some(org) = self.org.as_deref().filter(|o| !o.is_empty()) {
            if !entity.orgs().any(|o| o == org) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if entity.category != category {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                searchable_text(entity).any(|field| field.to_lowercase().contains(&term))
            }
            None => true,
        }
    }

    /// Matching entities, ordered by date with the id as tie-break.
    pub fn apply(&self, entities: &[Entity], dates: &DateIndex) -> Vec<Entity> {
        let mut keyed: Vec<(i64, &Entity)> = entities
            .iter()
            .filter(|e| self.matches(e))
            .map(|e| (dates.parse(&e.date), e))
            .collect();

        keyed.sort_by(|(da, a), (db, b)| {
            let ord = da.cmp(db).then_with(|| compare_ids(&a.id, &b.id));
            match self.sort {
                SortOrder::Oldest => ord,
                SortOrder::Newest => ord.reverse(),
            }
        });
        tracing::debug!(matched = keyed.len(), total = entities.len(), "query applied");
        keyed.into_iter().map(|(_, e)| e.clone()).collect()
    }
}

fn searchable_text(entity: &Entity) -> impl Iterator<Item = String> + '_ {
    [&entity.name, &entity.org, &entity.category, &entity.date]
        .into_iter()
        .cloned()
        .chain(SEARCHABLE_FIELDS.iter().filter_map(|key| entity.field(key)))
}

/// Numeric ids compare as numbers; anything else falls back to text order.
fn compare_ids(a: &EntityId, b: &EntityId) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.as_str().cmp(b.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Entity> {
        vec![
            Entity::new(1, "RT-1", "Dec 2022").with_org("Google").with_category("VLA"),
            Entity::new(2, "RT-2", "Jul 2023")
                .with_org("Google DeepMind, Google")
                .with_category("VLA")
                .with_field("backbone", "PaLI-X"),
            Entity::new(10, "Octo", "May 2024").with_org("UC Berkeley").with_category("VLA"),
            Entity::new(9, "OpenVLA", "Jun 2024").with_org("Stanford").with_category("VLA"),
            Entity::new(3, "Genie", "Feb 2024").with_org("Google DeepMind").with_category("World Model"),
            Entity::new(4, "Cosmos", "Jan 2025").with_org("NVIDIA").with_category("World Model"),
            Entity::new(5, "Mystery", "sometime").with_category("VLA"),
        ]
    }

    fn names(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn newest_first_by_default() {
        let out = Query::default().apply(&catalog(), &DateIndex::default());
        assert_eq!(
            names(&out),
            vec!["Cosmos", "OpenVLA", "Octo", "Genie", "RT-2", "RT-1", "Mystery"]
        );
    }

    #[test]
    fn oldest_first_breaks_ties_numerically() {
        let catalog = vec![
            Entity::new(10, "b", "Mar 2024"),
            Entity::new(9, "a", "Mar 2024"),
            Entity::new(2, "c", "Feb 2024"),
        ];
        let query = Query {
            sort: SortOrder::Oldest,
            ..Query::default()
        };
        assert_eq!(names(&query.apply(&catalog, &DateIndex::default())), vec!["c", "a", "b"]);
        assert_eq!(
            names(&Query::default().apply(&catalog, &DateIndex::default())),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn org_filter_matches_list_members() {
        let query = Query {
            org: Some("Google".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.apply(&catalog(), &DateIndex::default())), vec!["RT-2", "RT-1"]);
    }

    #[test]
    fn category_and_search_combine() {
        let query = Query {
            category: Some("VLA".into()),
            search: Some("  pali ".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.apply(&catalog(), &DateIndex::default())), vec!["RT-2"]);

        let query = Query {
            search: Some("deepmind".into()),
            ..Query::default()
        };
        assert_eq!(names(&query.apply(&catalog(), &DateIndex::default())), vec!["Genie", "RT-2"]);
    }

    #[test]
    fn blank_filters_match_everything() {
        let query = Query {
            org: Some(String::new()),
            category: Some(String::new()),
            search: Some("   ".into()),
            sort: SortOrder::Oldest,
        };
        assert_eq!(query.apply(&catalog(), &DateIndex::default()).len(), catalog().len());
    }
}
