//! Business domain model.

use crate::user::AccountStatus;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// KYB verification status of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum KybStatus {
    Verified,
    #[serde(rename = "Awaiting KYB Review")]
    #[strum(serialize = "Awaiting KYB Review")]
    AwaitingReview,
    Unverified,
    Declined,
}

/// A business customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub kyb_status: KybStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<AccountStatus>,
}
