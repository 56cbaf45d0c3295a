use crate::user::AccountStatus;
use serde::{Deserialize, Serialize};

/// A collection account issued to a user or business, settled into a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccount {
    pub id: String,
    pub account_name: String,
    pub owned_by: String,
    pub date_created: String,
    pub email: String,
    pub phone_number: String,
    pub settlement_wallet: String,
    pub status: AccountStatus,
}
