use serde::{Deserialize, Serialize};

use crate::domain::types::{Description, Title, TypeConstraintError};

/// Descriptive value object embedded in a category.
///
/// Has no identity of its own: two `Info` values are equal whenever their
/// fields are equal, and the fields are flattened into the owning category's
/// row rather than stored in a separate table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Info {
    pub title: Title,
    pub description: Description,
}

impl Info {
    /// Builds an `Info`, requiring both fields to be present (non-empty
    /// after trimming). No further wording rules are applied here.
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
