//! Persistence layer for the Employee/Blog service.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations and the [`Gateway`] that hands them out
//! - The schema migration log

pub mod db;
pub mod entities;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod migrations;
pub mod repositories;

pub use error::StoreError;
pub use gateway::{EntityKind, EntityStore, Gateway, NewRecord, Record};
