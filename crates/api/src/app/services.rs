use std::sync::Arc;

use evently_auth::TokenAuthority;
use evently_infra::{CredentialService, DocumentStore, EventService, UserService};

/// Everything the route handlers need, sharing one [`DocumentStore`].
pub struct AppServices {
    pub credentials: CredentialService,
    pub users: UserService,
    pub events: EventService,
}

impl AppServices {
    pub fn new(store: DocumentStore, tokens: Arc<dyn TokenAuthority>) -> Self {
        let store = Arc::new(store);
        Self {
            credentials: CredentialService::new(store.clone(), tokens),
            users: UserService::new(store.clone()),
            events: EventService::new(store),
        }
    }
}
