//! `evently-auth` — session token authority and role model.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how to
//! sign and verify session tokens and how to classify roles, nothing more.

pub mod claims;
pub mod principal;
pub mod roles;
pub mod token;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use principal::Identity;
pub use roles::{Privilege, Role};
pub use token::{Hs256TokenAuthority, SESSION_TTL_SECS, TokenAuthority, TokenError};
