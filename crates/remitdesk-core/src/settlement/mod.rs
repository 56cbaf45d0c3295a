//! Settlement domain module.

mod model;

pub use model::{Settlement, SettlementStatus};
