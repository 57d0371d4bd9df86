//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern; the
//! persistence engine behind them is an implementation detail. Concrete
//! implementations live in `crate::infrastructure::persistence`, and mock
//! implementations are auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage, lookup, and click counting
//! - [`UserRepository`] - User account storage and lookup

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
