use annotate::{Document, EntitySpan};
use serde::{Deserialize, Serialize};

/// Outbound view of an entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub description: Option<String>,
}

impl From<&EntitySpan> for EntityRecord {
    fn from(span: &EntitySpan) -> Self {
        Self {
            text: span.text.clone(),
            label: span.label.clone(),
            start: span.start,
            end: span.end,
            description: span.description.clone(),
        }
    }
}

/// Entities of `document` in document order.
pub fn project_entities(document: &Document) -> Vec<EntityRecord> {
    document.entities.iter().map(EntityRecord::from).collect()
}
