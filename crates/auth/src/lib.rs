//! `stockroom-auth` — authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models JWT
//! claims and verifies tokens, nothing more.

pub mod claims;
pub mod validator;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use validator::{Hs256JwtValidator, JwtValidator};
