//! Catalog entities.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::EntityId;

/// One catalog record (a model release, in the shipped catalog).
///
/// The engines read `id`, `name`, and `date`; `org` and `category` feed the
/// query layer. Everything else the source carries lands in `fields`, in
/// source order, for renderers that want it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    /// Raw `"Mon Year"` release date.
    #[serde(default)]
    pub date: String,
    /// Organization, possibly a comma-separated list.
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub category: String,
    /// Free-form display fields.
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Entity {
    /// Create an entity with the fields the engines need.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            org: String::new(),
            category: String::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// A free-form field as text. Numbers and booleans are rendered; arrays,
    /// objects and nulls are treated as absent.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The individual organizations named in `org`.
    pub fn orgs(&self) -> impl Iterator<Item = &str> {
        self.org.split(',').map(str::trim).filter(|o| !o.is_empty())
    }
}
