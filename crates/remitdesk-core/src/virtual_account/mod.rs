//! Virtual account domain module.

mod model;

pub use model::VirtualAccount;
