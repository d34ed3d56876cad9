pub mod blogs;
pub mod employees;
pub mod health;
pub mod migrations;
