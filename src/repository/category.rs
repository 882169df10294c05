use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::category::Category;
use crate::domain::info::Info;
use crate::domain::stats::Stats;
use crate::domain::topic::Topic;
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::models::topic::{NewTopic as DbNewTopic, Topic as DbTopic};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository, RepositoryResult,
};

/// Loads the topic rows owned by a category, ordered by topic id so that
/// reloads observe a stable ordering.
fn load_topics(conn: &mut DbConnection, category_id: i32) -> RepositoryResult<Vec<DbTopic>> {
    use crate::schema::topics;

    let rows = topics::table
        .filter(topics::category_id.eq(category_id))
        .order(topics::id.asc())
        .load::<DbTopic>(conn)?;

    Ok(rows)
}

fn load_aggregate(conn: &mut DbConnection, row: DbCategory) -> RepositoryResult<Category> {
    let topics = load_topics(conn, row.id)?;
    Ok(row.into_domain(topics)?)
}

impl CategoryReader for DieselRepository {
    fn get_category_by_title(&self, title: &str) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let row = categories::table
            .filter(categories::title.eq(title))
            .order(categories::id.asc())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(load_aggregate(&mut conn, row)?)),
            None => Ok(None),
        }
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let row = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(load_aggregate(&mut conn, row)?)),
            None => Ok(None),
        }
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::schema::{categories, topics};

        let mut conn = self.conn()?;

        let query_builder = || categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut rows = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            rows = rows.offset(offset).limit(limit);
        }

        let rows = rows
            .order(categories::title.asc())
            .load::<DbCategory>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut topics_by_category: HashMap<i32, Vec<DbTopic>> = HashMap::new();
        for topic in topics::table
            .filter(topics::category_id.eq_any(&ids))
            .order(topics::id.asc())
            .load::<DbTopic>(&mut conn)?
        {
            topics_by_category
                .entry(topic.category_id)
                .or_default()
                .push(topic);
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let topics = topics_by_category.remove(&row.id).unwrap_or_default();
                Ok(row.into_domain(topics)?)
            })
            .collect::<RepositoryResult<Vec<Category>>>()?;

        Ok((total, items))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, title: &str, description: &str) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let info = Info::new(title, description)?;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = info.clone().into();

        // Counters fall back to their storage defaults (zero), matching the
        // zeroed in-memory stats returned here.
        let id = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(categories::id)
            .get_result::<i32>(&mut conn)?;

        log::debug!("created category {id} with title {title:?}");

        Ok(Category::new(
            id.try_into()?,
            info,
            Stats::default(),
            Vec::new(),
        ))
    }

    fn save_category(&self, category: &mut Category) -> RepositoryResult<usize> {
        use crate::schema::{categories, topics};

        let mut conn = self.conn()?;

        let (affected, persisted) = conn.transaction(|conn| {
            let mut affected = 0;

            if category.stats_changed() {
                affected += diesel::update(
                    categories::table.filter(categories::id.eq(category.id().get())),
                )
                .set((
                    categories::total_likes_count.eq(category.stats().total_likes_count.get()),
                    categories::total_comments_count
                        .eq(category.stats().total_comments_count.get()),
                ))
                .execute(conn)?;
            }

            let mut persisted = Vec::with_capacity(category.added_topics().len());
            for topic in category.added_topics() {
                let row = DbNewTopic::from_domain(topic.clone(), category.id());
                let id = diesel::insert_into(topics::table)
                    .values(row)
                    .returning(topics::id)
                    .get_result::<i32>(conn)?;
                affected += 1;
                persisted.push(Topic {
                    id: id.try_into()?,
                    title: topic.title.clone(),
                    description: topic.description.clone(),
                });
            }

            RepositoryResult::Ok((affected, persisted))
        })?;

        for topic in persisted {
            category.attach_topic(topic);
        }
        category.mark_saved();

        log::debug!("saved category {} ({affected} rows)", category.id());

        Ok(affected)
    }
}
