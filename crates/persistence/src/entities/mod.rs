//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod account;
pub mod applied_migration;
pub mod author;
pub mod blog;
pub mod employee;
pub mod post;

pub use account::AccountEntity;
pub use applied_migration::AppliedMigrationEntity;
pub use author::AuthorEntity;
pub use blog::{BlogEntity, BlogPostCountEntity};
pub use employee::EmployeeEntity;
pub use post::PostEntity;
