//! SQLite-backed repository implementation.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer and multiple concurrent readers.
//! - **Busy timeout**: writers wait on SQLite's lock instead of failing fast.
//!   Concurrent edits of the same article are last-write-wins.
//! - **Embedded migrations**: `sqlx::migrate!` runs `migrations/*.sql` in order
//!   when [`Database::open`] is called. Applied versions are skipped on reopen.
//!   Column bounds are CHECKed in characters, NULs included.
//!
//! Every repository call goes through [`Database::transaction`], which holds
//! one pooled connection for the duration of a single transaction.

mod article_repo;
mod database;

pub use article_repo::SqliteArticleRepository;
pub use database::{Database, PoolConfig};
