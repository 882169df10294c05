use diesel::prelude::*;

use crate::domain::topic::{NewTopic as DomainNewTopic, Topic as DomainTopic};
use crate::domain::types::{CategoryId, Description, Title, TypeConstraintError};
use crate::models::category::Category;

/// Diesel model representing the `topics` table.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::topics)]
#[diesel(belongs_to(Category))]
pub struct Topic {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
}

/// Insertable form of [`Topic`], bound to its owning category.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::topics)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub category_id: i32,
}

impl TryFrom<Topic> for DomainTopic {
    type Error = TypeConstraintError;

    fn try_from(topic: Topic) -> Result<Self, Self::Error> {
        Ok(Self {
            id: topic.id.try_into()?,
            title: Title::new(topic.title)?,
            description: Description::new(topic.description)?,
        })
    }
}

impl NewTopic {
    /// Binds an unpersisted domain topic to the category that owns it.
    pub fn from_domain(topic: DomainNewTopic, category_id: CategoryId) -> Self {
        Self {
            title: topic.title.into_inner(),
            description: topic.description.into_inner(),
            category_id: category_id.get(),
        }
    }
}
