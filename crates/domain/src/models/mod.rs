//! Domain models.

pub mod author;
pub mod blog;
pub mod employee;

pub use author::{Account, Author, NewAccount, NewAuthor};
pub use blog::{Blog, BlogPostCount, CreateBlogRequest, NewBlog, NewPost, Post};
pub use employee::{CreateEmployeeRequest, Employee, NewEmployee};
