pub mod auth;
pub mod cognito;
pub mod config;
pub mod dynamo;
pub mod error;
pub mod reservations;
pub mod response;
pub mod router;
pub mod tables;
pub mod types;
pub mod validation;

use std::sync::Arc;

use cognito::IdentityProvider;
use config::Config;
use dynamo::BookingStore;

/// Shared application state. Clients are constructed once at startup and
/// injected, so tests substitute doubles through the gateway traits.
pub struct AppState<I: IdentityProvider, S: BookingStore> {
    pub identity: I,
    pub store: S,
    pub config: Config,
}

impl<I: IdentityProvider, S: BookingStore> AppState<I, S> {
    pub fn new(identity: I, store: S, config: Config) -> Arc<Self> {
        Arc::new(Self {
            identity,
            store,
            config,
        })
    }
}
