//! Business domain module.

mod model;

pub use model::{Business, KybStatus};
