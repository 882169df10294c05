//! Domain model: aggregates, entities and value objects.

pub mod category;
pub mod info;
pub mod stats;
pub mod topic;
pub mod types;
