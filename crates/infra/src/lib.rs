//! Infrastructure layer: document persistence, application services, config.

pub mod config;
pub mod records;
pub mod services;
pub mod store;

pub use config::Config;
pub use records::{Event, EventPatch, NewEvent, NewUser, PublicUser, User, UserPatch};
pub use services::{CredentialService, EventService, ServiceError, Session, UserService};
pub use store::{Document, DocumentStore, InMemoryStore, JsonFileStore, Store, StoreError};
