//! Transaction domain module.

mod model;

pub use model::{Transaction, TransactionStatus, TransactionType};
