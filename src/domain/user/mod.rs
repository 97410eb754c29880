//! User domain
//!
//! User entity, signup validation, and the repository trait the user store
//! must implement.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_name, validate_password, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
