//! User infrastructure
//!
//! Argon2 password hashing, in-memory and PostgreSQL repositories, and the
//! user service composing them.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::{ensure_schema, PostgresUserRepository};
pub use repository::InMemoryUserRepository;
pub use service::{SignupRequest, UserService};
