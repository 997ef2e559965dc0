//! Catalog-level summary numbers for the page header and filter menus.

use std::collections::BTreeSet;

use modelscape_types::Entity;
use serde::Serialize;

use crate::date::DateIndex;

/// Header statistics for a set of entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_entities: usize,
    /// Distinct organizations, counting each member of a comma-separated list.
    pub total_orgs: usize,
    /// `"2023"`, `"2022–2025"`, or `"—"` when no entity has a readable year.
    pub date_range: String,
}

impl CatalogStats {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let years: Vec<i32> = entities
            .iter()
            .filter(|e| !e.date.trim().is_empty())
            .filter_map(|e| DateIndex::year_of(&e.date))
            .collect();

        let date_range = match (years.iter().min(), years.iter().max()) {
            (Some(min), Some(max)) if min == max => min.to_string(),
            (Some(min), Some(max)) => format!("{min}–{max}"),
            _ => "—".to_string(),
        };

        Self {
            total_entities: entities.len(),
            total_orgs: distinct_orgs(entities).len(),
            date_range,
        }
    }
}

/// Every organization named by any entity, sorted.
pub fn distinct_orgs(entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .flat_map(|e| e.orgs())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every non-empty category, sorted.
pub fn distinct_categories(entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .map(|e| e.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
