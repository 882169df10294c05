use serde::{Deserialize, Serialize};

use crate::domain::types::{Description, Title, TopicId, TypeConstraintError};

/// A discussion topic owned by exactly one category.
///
/// Topics have identity but no repository of their own: they are only
/// reachable through the owning category. Topic-level business rules are an
/// open extension point and intentionally absent here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub title: Title,
    pub description: Description,
}

/// An unpersisted topic, created in memory and inserted when the owning
/// category is saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTopic {
    pub title: Title,
    pub description: Description,
}

impl NewTopic {
    pub fn new<T, D>(title: T, description: D) -> Result<Self, TypeConstraintError>
    where
        T: Into<String>,
        D: Into<String>,
    {
        Ok(Self {
            title: Title::new(title)?,
            description: Description::new(description)?,
        })
    }
}
