//! Navigation seam.
//!
//! The HTTP client and the auth flows move the operator between screens by
//! path (`"/"` for login, `"/dashboard"` after sign-in). The host decides
//! what a navigation means: a browser would change location, the console
//! records it and prints the active screen.

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub trait Navigator: Send + Sync {
    /// Replaces the current location with `path`.
    fn navigate(&self, path: &str);
}

/// Navigator that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}
