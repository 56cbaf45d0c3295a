//! Data access for the console.
//!
//! # Module Structure
//!
//! - `cache`: keyed query cache with a five-minute stale time
//! - `data_access`: cached reads over the composed repository
//! - `mutation`: the backend-then-simulator mutation pipeline and the admin actions
//! - `list_query`: client-side search, filter and pagination

mod cache;
mod data_access;
mod list_query;
mod mutation;

pub use cache::{QueryCache, STALE_TIME};
pub use data_access::DataAccess;
pub use list_query::{DEFAULT_PAGE_SIZE, ListQuery, Listable, Page};
pub use mutation::{AdminMutations, MutationPipeline, should_fall_back};
