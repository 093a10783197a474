//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled profile service client; both are
//! cheap to clone.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::profile::{ProfileClient, ProfileError};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub profile: ProfileClient,
}

impl AppState {
    /// Build state from config, constructing the profile service client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, ProfileError> {
        let profile = ProfileClient::new(&config.profile_api_url, config.timeouts)?;
        Ok(Self { config: Arc::new(config), profile })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
