use serde::{Deserialize, Serialize};

use crate::domain::types::{CommentsCount, LikesCount};

/// Counter value object embedded in a category.
///
/// Both counters start at zero (the storage layer defaults them the same
/// way). `Stats` exposes no mutating operations: every mutation goes through
/// the owning [`Category`](crate::domain::category::Category) so that the
/// aggregate can track the change for the next save.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_likes_count: LikesCount,
    pub total_comments_count: CommentsCount,
}

impl Stats {
    pub fn new(total_likes_count: LikesCount, total_comments_count: CommentsCount) -> Self {
        Self {
            total_likes_count,
            total_comments_count,
        }
    }
}
