//! Domain layer for the Employee/Blog service.
//!
//! This crate contains:
//! - Entity records (Employee, Blog, Post, Author, Account)
//! - Creation inputs and the defaults applied to them

pub mod models;
