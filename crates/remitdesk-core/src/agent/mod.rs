//! Agent domain module.
//!
//! Agents onboard customers and earn commission per CAD moved; tiers define
//! the commission bands.

mod model;

pub use model::{Agent, AgentTier};
