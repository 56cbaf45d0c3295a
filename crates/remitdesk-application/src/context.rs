//! Composition root.
//!
//! [`AppContext`] decides once whether the simulators or the HTTP backend
//! serve auth and data calls, and wires every service around that choice.
//! Nothing downstream consults the simulation switch again.

use crate::auth_state::AuthState;
use crate::auth_usecase::AuthUseCase;
use crate::data::{AdminMutations, DataAccess, MutationPipeline};
use crate::routes::{HistoryNavigator, Route, RouteGuard};
use anyhow::{Context, Result};
use remitdesk_core::ApiResult;
use remitdesk_core::auth::AuthService;
use remitdesk_core::config::EnvSettings;
use remitdesk_core::navigation::Navigator;
use remitdesk_core::repository::AdminRepository;
use remitdesk_core::session::SessionStorage;
use remitdesk_infrastructure::{
    ApiClient, ConfigService, FileKeyValueStore, HttpAdminRepository, HttpAuthService,
    MockAdminRepository, MockAuthService, RemitPaths,
};
use std::sync::Arc;
use std::time::Duration;

/// Knobs for [`AppContext::compose`].
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Overrides the simulators' artificial delays.
    pub mock_latency: Option<Duration>,
}

/// Everything the console needs, built from one [`EnvSettings`].
pub struct AppContext {
    settings: EnvSettings,
    use_mock: bool,
    storage: SessionStorage,
    navigator: Arc<HistoryNavigator>,
    auth_state: Arc<AuthState>,
    auth: AuthUseCase,
    data: Arc<DataAccess>,
    mutations: AdminMutations,
}

impl AppContext {
    /// Reads settings from `config` and keeps the session in `session.toml`
    /// under `paths`.
    pub fn bootstrap(paths: &RemitPaths, config: &ConfigService) -> Result<Self> {
        let settings = config.env_settings();
        let storage = SessionStorage::new(Arc::new(FileKeyValueStore::new(paths.session_file())));
        tracing::debug!(config_dir = %paths.config_dir().display(), "Bootstrapping");
        Self::compose(settings, storage, ContextOptions::default())
    }

    /// Wires the services for `settings` over an existing session store.
    ///
    /// Fails when the backend is selected but its URL is missing or invalid.
    pub fn compose(
        settings: EnvSettings,
        storage: SessionStorage,
        options: ContextOptions,
    ) -> Result<Self> {
        let use_mock = settings.should_use_mock_service();
        if settings.is_mock_fallback_in_production() {
            tracing::warn!(
                "No API URL configured in a production build; serving simulated data to operators"
            );
        }

        let navigator = Arc::new(HistoryNavigator::new());
        let dyn_navigator: Arc<dyn Navigator> = navigator.clone();
        let auth_state = Arc::new(AuthState::new(storage.clone()));

        let mut mock_auth = MockAuthService::new(storage.clone());
        let mut mock_data = MockAdminRepository::new();
        if let Some(latency) = options.mock_latency {
            mock_auth = mock_auth.with_latency(latency);
            mock_data = mock_data.with_latency(latency);
        }
        let simulated: Arc<dyn AdminRepository> = Arc::new(mock_data);

        let clients = if settings.api_url.is_empty() {
            None
        } else {
            match http_clients(&settings, &storage, &dyn_navigator) {
                Ok(clients) => Some(clients),
                Err(e) if use_mock => {
                    tracing::warn!("Ignoring unusable API URL in simulation mode: {:#}", e);
                    None
                }
                Err(e) => return Err(e),
            }
        };
        let backend = clients.as_ref().map(|(_, private)| {
            let repository: Arc<dyn AdminRepository> =
                Arc::new(HttpAdminRepository::new(private.clone()));
            repository
        });

        let (auth_service, repository): (Arc<dyn AuthService>, Arc<dyn AdminRepository>) =
            if use_mock {
                (Arc::new(mock_auth), simulated.clone())
            } else {
                let (public, private) = clients
                    .context("Backend mode selected but no API URL is configured")?;
                let repository = backend
                    .clone()
                    .context("Backend mode selected but no API URL is configured")?;
                (Arc::new(HttpAuthService::new(public, private)), repository)
            };

        let data = Arc::new(DataAccess::new(repository));
        let mutations = AdminMutations::new(
            MutationPipeline::new(use_mock),
            backend,
            Some(simulated),
            data.clone(),
        );
        let auth = AuthUseCase::new(
            auth_service,
            storage.clone(),
            auth_state.clone(),
            dyn_navigator,
            use_mock,
        );

        tracing::info!(
            simulated = use_mock,
            api_url = %settings.api_url,
            authenticated = auth_state.is_authenticated(),
            "Console ready"
        );

        Ok(Self {
            settings,
            use_mock,
            storage,
            navigator,
            auth_state,
            auth,
            data,
            mutations,
        })
    }

    pub fn settings(&self) -> &EnvSettings {
        &self.settings
    }

    /// True when the simulators serve auth and data calls.
    pub fn use_mock(&self) -> bool {
        self.use_mock
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    pub fn auth_state(&self) -> &Arc<AuthState> {
        &self.auth_state
    }

    pub fn auth(&self) -> &AuthUseCase {
        &self.auth
    }

    pub fn data(&self) -> &DataAccess {
        &self.data
    }

    pub fn mutations(&self) -> &AdminMutations {
        &self.mutations
    }

    /// Where a request for `location` lands given the current session.
    pub fn resolve_route(&self, location: &str) -> Route {
        RouteGuard::resolve(location, self.auth_state.is_authenticated())
    }

    /// Passes `result` through, re-reading the auth flag when the backend
    /// ended the session.
    pub fn track<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(e) = &result {
            if e.is_session_expired() {
                self.auth_state.hydrate();
            }
        }
        result
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("use_mock", &self.use_mock)
            .field("api_url", &self.settings.api_url)
            .field("auth_state", &self.auth_state)
            .finish()
    }
}

fn http_clients(
    settings: &EnvSettings,
    storage: &SessionStorage,
    navigator: &Arc<dyn Navigator>,
) -> Result<(ApiClient, ApiClient)> {
    let public = ApiClient::public(settings).context("Failed to build public API client")?;
    let private = ApiClient::private(settings, storage.clone(), navigator.clone())
        .context("Failed to build private API client")?;
    Ok((public, private))
}
