//! Repository implementations for database operations.

pub mod account;
pub mod author;
pub mod blog;
pub mod employee;
pub mod post;

pub use account::AccountRepository;
pub use author::AuthorRepository;
pub use blog::BlogRepository;
pub use employee::EmployeeRepository;
pub use post::PostRepository;
