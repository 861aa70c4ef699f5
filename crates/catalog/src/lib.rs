//! SQLite catalog storage for a small library of books, authors, categories
//! and reviews.
//!
//! This crate is the data-access core: it defines the schema, owns the
//! single database connection, and exposes every record operation behind
//! [`Repository`]. Presentation (the console menu) lives elsewhere and only
//! renders what comes back from here.
//!
//! # Architecture
//! - [`Database`]: connection handle; creates the schema on first connect
//!   and is idempotent against an existing file.
//! - [`Repository`]: lookup-validate-mutate operations over the four
//!   entities, each a single atomic request/response.
//! - [`IntegrityPolicy`]: decides how review → book references are treated,
//!   since the engine itself does not enforce them.

mod db;
pub mod error;
mod models;
mod policy;
mod repo;

pub use crate::db::Database;
pub use crate::models::{Author, Book, BookListing, Category, Review};
pub use crate::policy::IntegrityPolicy;
pub use crate::repo::Repository;
