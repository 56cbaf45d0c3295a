//! Application layer for remitdesk.
//!
//! Coordinates the core traits and their infrastructure implementations into
//! the flows the console offers: signing in and out, cached reads, admin
//! mutations with the simulated fallback, and route guarding.

pub mod auth_state;
pub mod auth_usecase;
pub mod context;
pub mod data;
pub mod routes;

pub use auth_state::AuthState;
pub use auth_usecase::AuthUseCase;
pub use context::{AppContext, ContextOptions};
pub use data::{AdminMutations, DataAccess, ListQuery, MutationPipeline, Page, QueryCache};
pub use routes::{HistoryNavigator, Route, RouteGuard, Section};
