//! Currency routing configuration.
//!
//! - `CountryCurrency`: which partners handle pay-in and pay-out per country
//! - `CurrencyRoute`: a source → destination corridor and its switches

mod model;

pub use model::{CountryCurrency, CurrencyRoute, RouteStatus};
