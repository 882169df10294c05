use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::info::Info;
use crate::domain::stats::Stats;
use crate::domain::topic::{NewTopic, Topic};
use crate::domain::types::CategoryId;

/// Aggregate root owning a collection of [`Topic`] entities and the embedded
/// [`Info`] and [`Stats`] value objects.
///
/// All mutation goes through the methods below. The aggregate records which
/// parts changed (stats counters, appended topics) so that a repository save
/// writes exactly the pending changes; the repository clears the record once
/// the save succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    info: Info,
    stats: Stats,
    topics: Vec<Topic>,
    #[serde(skip)]
    added_topics: Vec<NewTopic>,
    #[serde(skip)]
    stats_changed: bool,
}

impl Category {
    /// Reconstitutes a category in a clean state (no pending changes).
    pub fn new(id: CategoryId, info: Info, stats: Stats, topics: Vec<Topic>) -> Self {
        Self {
            id,
            info,
            stats,
            topics,
            added_topics: Vec::new(),
            stats_changed: false,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Topics already persisted for this category.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topics appended since the aggregate was loaded, not yet persisted.
    pub fn added_topics(&self) -> &[NewTopic] {
        &self.added_topics
    }

    /// Whether the stats counters diverged from their persisted values.
    pub fn stats_changed(&self) -> bool {
        self.stats_changed
    }

    /// Registers one more like on this category.
    pub fn inc_like(&mut self) {
        self.stats.total_likes_count = self.stats.total_likes_count.incremented();
        self.stats_changed = true;
    }

    /// Registers one more comment on this category.
    pub fn inc_comment(&mut self) {
        self.stats.total_comments_count = self.stats.total_comments_count.incremented();
        self.stats_changed = true;
    }

    /// Appends a topic to the aggregate. Topic invariants beyond field
    /// presence are an open extension point; nothing is validated here, and
    /// duplicates are accepted.
    pub fn add_topic(&mut self, topic: NewTopic) {
        self.added_topics.push(topic);
    }

    /// Description text in its canonical lowercase form.
    pub fn normalized_description(&self) -> String {
        self.info.description.to_lowercase()
    }

    /// Likes counter rendered for display.
    pub fn likes_label(&self) -> String {
        self.stats.total_likes_count.to_string()
    }

    /// Moves a freshly persisted topic into the owned collection.
    pub(crate) fn attach_topic(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    /// Marks the aggregate clean after a successful save.
    pub(crate) fn mark_saved(&mut self) {
        self.stats_changed = false;
        self.added_topics.clear();
    }
}

/// Categories compare by their embedded [`Info`] only; topics and stats
/// never participate.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
    }
}

impl Eq for Category {}

/// Hash combines the info title and description, consistent with equality.
/// Not meant to be collision resistant.
impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.title.hash(state);
        self.info.description.hash(state);
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.info.title)
    }
}
