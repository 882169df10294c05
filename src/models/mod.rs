//! Diesel row structs and conversions into the domain model.

pub mod category;
pub mod topic;
