use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::info::Info;
use crate::domain::stats::Stats;
use crate::domain::topic::Topic as DomainTopic;
use crate::domain::types::{CommentsCount, Description, LikesCount, Title, TypeConstraintError};
use crate::models::topic::Topic as DbTopic;

/// Diesel model representing the `categories` table. The `Info` and `Stats`
/// value objects are flattened into this row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub total_likes_count: i32,
    pub total_comments_count: i32,
}

/// Insertable form of [`Category`]. The counters are left to their storage
/// defaults (zero).
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub title: String,
    pub description: String,
}

impl Category {
    /// Reconstitutes the aggregate from its row and the owned topic rows,
    /// rebuilding the embedded value objects along the way.
    pub fn into_domain(
        self,
        topics: Vec<DbTopic>,
    ) -> Result<DomainCategory, TypeConstraintError> {
        let info = Info {
            title: Title::new(self.title)?,
            description: Description::new(self.description)?,
        };
        let stats = Stats::new(
            LikesCount::new(self.total_likes_count)?,
            CommentsCount::new(self.total_comments_count)?,
        );
        let topics = topics
            .into_iter()
            .map(DomainTopic::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DomainCategory::new(self.id.try_into()?, info, stats, topics))
    }
}

impl From<Info> for NewCategory {
    fn from(info: Info) -> Self {
        Self {
            title: info.title.into_inner(),
            description: info.description.into_inner(),
        }
    }
}
