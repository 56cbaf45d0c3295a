//! Console routes, the guard in front of them, and a recording navigator.

use remitdesk_core::navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator};
use remitdesk_core::repository::EntityKind;
use std::sync::Mutex;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Sections under `/dashboard`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Users,
    Businesses,
    Agents,
    Transactions,
    VirtualAccounts,
    Settlements,
    CountryCurrencyConfig,
    Settings,
    Superadmin,
}

impl Section {
    /// The screen that lists `entity`.
    pub fn for_entity(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Users => Section::Users,
            EntityKind::Businesses => Section::Businesses,
            EntityKind::Agents | EntityKind::AgentTiers => Section::Agents,
            EntityKind::Transactions => Section::Transactions,
            EntityKind::Settlements => Section::Settlements,
            EntityKind::VirtualAccounts => Section::VirtualAccounts,
            EntityKind::CountryCurrencies | EntityKind::Routes => Section::CountryCurrencyConfig,
        }
    }

    /// Whether `/dashboard/<section>/<id>` is a detail page.
    pub fn has_details(&self) -> bool {
        matches!(
            self,
            Section::Users
                | Section::Businesses
                | Section::Agents
                | Section::Transactions
                | Section::VirtualAccounts
                | Section::Settlements
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword { token: Option<String> },
    Dashboard,
    Section(Section),
    Detail { section: Section, id: String },
}

impl Route {
    /// Parses a location. Anything unrecognized resolves to [`Route::Login`].
    ///
    /// A `?token=` query on the reset page is kept; other queries and
    /// trailing slashes are ignored.
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["auth", "signup"] => Route::Signup,
            ["auth", "forgot-password"] => Route::ForgotPassword,
            ["auth", "reset-password"] => Route::ResetPassword {
                token: query.and_then(reset_token),
            },
            ["dashboard"] => Route::Dashboard,
            ["dashboard", section] => match section.parse() {
                Ok(section) => Route::Section(section),
                Err(_) => Route::Login,
            },
            ["dashboard", section, id] => match section.parse::<Section>() {
                Ok(section) if section.has_details() => Route::Detail {
                    section,
                    id: (*id).to_string(),
                },
                _ => Route::Login,
            },
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Signup => "/auth/signup".to_string(),
            Route::ForgotPassword => "/auth/forgot-password".to_string(),
            Route::ResetPassword { token: None } => "/auth/reset-password".to_string(),
            Route::ResetPassword { token: Some(token) } => {
                format!("/auth/reset-password?token={}", token)
            }
            Route::Dashboard => DASHBOARD_PATH.to_string(),
            Route::Section(section) => format!("{}/{}", DASHBOARD_PATH, section),
            Route::Detail { section, id } => format!("{}/{}/{}", DASHBOARD_PATH, section, id),
        }
    }

    /// Requires a signed-in operator.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Section(_) | Route::Detail { .. }
        )
    }
}

fn reset_token(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "token")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Decides where a requested location actually lands.
pub struct RouteGuard;

impl RouteGuard {
    /// Protected routes need a session; the public auth screens send a
    /// signed-in operator to the dashboard. A reset link is always honored.
    pub fn resolve(location: &str, authenticated: bool) -> Route {
        let route = Route::parse(location);
        if route.is_protected() && !authenticated {
            tracing::debug!(location, "Not signed in, redirecting to login");
            return Route::Login;
        }
        if authenticated && !route.is_protected() && !matches!(route, Route::ResetPassword { .. })
        {
            return Route::Dashboard;
        }
        route
    }
}

/// [`Navigator`] that keeps every location it was sent to.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigate");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/auth/signup"), Route::Signup);
        assert_eq!(Route::parse("/auth/forgot-password/"), Route::ForgotPassword);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(
            Route::parse("/dashboard/country-currency-config"),
            Route::Section(Section::CountryCurrencyConfig)
        );
        assert_eq!(
            Route::parse("/dashboard/businesses/b-3"),
            Route::Detail {
                section: Section::Businesses,
                id: "b-3".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_paths_resolve_to_login() {
        for path in ["/nope", "/dashboard/nope", "/dashboard/settings/1", "/a/b/c/d"] {
            assert_eq!(Route::parse(path), Route::Login, "path {}", path);
        }
    }

    #[test]
    fn test_reset_token_from_query() {
        assert_eq!(
            Route::parse("/auth/reset-password?x=1&token=abc"),
            Route::ResetPassword {
                token: Some("abc".to_string())
            }
        );
        assert_eq!(
            Route::parse("/auth/reset-password?token="),
            Route::ResetPassword { token: None }
        );
    }

    #[test]
    fn test_section_paths_round_trip() {
        for section in Section::iter() {
            let route = Route::Section(section);
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_every_entity_has_a_screen() {
        assert_eq!(
            Section::for_entity(EntityKind::Routes),
            Section::CountryCurrencyConfig
        );
        for entity in EntityKind::iter() {
            let route = Route::Section(Section::for_entity(entity));
            assert!(route.is_protected(), "entity {}", entity);
        }
    }

    #[test]
    fn test_guard_redirects() {
        assert_eq!(
            RouteGuard::resolve("/dashboard/users", false),
            Route::Login
        );
        assert_eq!(RouteGuard::resolve("/auth/signup", true), Route::Dashboard);
        assert_eq!(RouteGuard::resolve("/", true), Route::Dashboard);
        assert_eq!(
            RouteGuard::resolve("/dashboard/users/1", true),
            Route::Detail {
                section: Section::Users,
                id: "1".to_string()
            }
        );
        assert_eq!(RouteGuard::resolve("/auth/signup", false), Route::Signup);
    }

    #[test]
    fn test_signed_in_operator_keeps_reset_link() {
        assert_eq!(
            RouteGuard::resolve("/auth/reset-password?token=abc", true),
            Route::ResetPassword {
                token: Some("abc".to_string())
            }
        );
        assert_eq!(
            RouteGuard::resolve("/auth/forgot-password", true),
            Route::Dashboard
        );
    }

    #[test]
    fn test_history_navigator_tracks_current() {
        let navigator = HistoryNavigator::new();
        assert!(navigator.current().is_none());

        navigator.navigate(DASHBOARD_PATH);
        navigator.navigate(LOGIN_PATH);

        assert_eq!(navigator.current().as_deref(), Some(LOGIN_PATH));
        assert_eq!(navigator.history(), vec![DASHBOARD_PATH, LOGIN_PATH]);
    }
}
