//! User domain module.
//!
//! Individual customers of the remittance platform, with their KYC and
//! account statuses.

mod model;

pub use model::{AccountStatus, KycStatus, User};
