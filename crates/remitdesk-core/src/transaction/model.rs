//! Transaction domain model.
//!
//! Amounts are carried as the display strings the backend returns
//! (`"1,000 CAD"`, `"₦1,250,000"`); no arithmetic is done on them here.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Processing,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Not validated against the users collection.
    pub user_email: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub source_amount: String,
    pub destination_amount: String,
    pub status: TransactionStatus,
    pub date: String,
}
