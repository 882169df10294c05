use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::types::CategoryId;

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely. Each operation acquires one pooled connection,
/// which scopes the unit of work to that operation.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query parameters for listing categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Pagination parameters; `None` returns everything.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for category aggregates.
pub trait CategoryReader {
    /// Retrieve the first category whose info title equals `title`.
    fn get_category_by_title(&self, title: &str) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// List categories ordered by title, with the total count.
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations for category aggregates.
pub trait CategoryWriter {
    /// Persist a new category with the given info and zeroed stats, returning
    /// the in-memory aggregate carrying its fresh identifier.
    fn create_category(&self, title: &str, description: &str) -> RepositoryResult<Category>;
    /// Flush the aggregate's pending changes (stats counters, added topics)
    /// in one transaction, returning the number of rows written. On success
    /// the aggregate is updated in place: added topics join the owned
    /// collection with their assigned identifiers and the change record is
    /// cleared.
    fn save_category(&self, category: &mut Category) -> RepositoryResult<usize>;
}
