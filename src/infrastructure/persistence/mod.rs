//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries, so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, lookup, and click counting
//! - [`PgUserRepository`] - User account storage and lookup

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
