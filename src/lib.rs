//! Data layer for the collaboration board.
//!
//! This crate exposes the domain model (aggregates, entities and value
//! objects), the Diesel models and schema backing them, and the repositories
//! that translate between the two.

pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;
