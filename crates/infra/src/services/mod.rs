//! Application services: the transaction shape every route runs through.
//!
//! Each service call is one read-modify-write cycle on the [`DocumentStore`].
//!
//! [`DocumentStore`]: crate::store::DocumentStore

pub mod credentials;
pub mod events;
pub mod users;

use thiserror::Error;

use evently_auth::TokenError;
use evently_core::DomainError;

use crate::store::StoreError;

pub use credentials::{CredentialService, Session};
pub use events::EventService;
pub use users::UserService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Login mismatch. Deliberately says nothing about which part was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
