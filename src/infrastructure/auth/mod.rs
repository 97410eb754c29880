//! Authentication infrastructure

mod jwt;

pub use jwt::{JwtConfig, JwtService, TokenClaims, TokenService};
