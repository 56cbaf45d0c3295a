use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum SettlementStatus {
    Completed,
    Pending,
    Processing,
    Failed,
}

/// A payout batch settled to a beneficiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: String,
    pub reference: String,
    pub amount: String,
    pub status: SettlementStatus,
    pub date: String,
    pub beneficiary: String,
}
