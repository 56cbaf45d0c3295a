//! User domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// KYC verification status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum KycStatus {
    #[serde(rename = "Tier 2 Verified")]
    #[strum(serialize = "Tier 2 Verified")]
    Tier2Verified,
    #[serde(rename = "Tier 1 Verified")]
    #[strum(serialize = "Tier 1 Verified")]
    Tier1Verified,
    #[serde(rename = "Awaiting KYC Review")]
    #[strum(serialize = "Awaiting KYC Review")]
    AwaitingReview,
    Unverified,
    Declined,
}

impl KycStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, KycStatus::Tier1Verified | KycStatus::Tier2Verified)
    }
}

/// Account status shared by users, businesses, virtual accounts and
/// country-currency entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum AccountStatus {
    #[default]
    Active,
    Pending,
    Blocked,
    Inactive,
}

/// A platform user (customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub kyc_status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<AccountStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_parses_backend_shape() {
        let user: User = serde_json::from_value(json!({
            "id": "3",
            "firstName": "Oluwaseun",
            "lastName": "Adeyemi",
            "email": "seun.adeyemi@example.com",
            "kycStatus": "Awaiting KYC Review"
        }))
        .unwrap();

        assert_eq!(user.kyc_status, KycStatus::AwaitingReview);
        assert!(user.phone.is_none());
        assert_eq!(user.full_name(), "Oluwaseun Adeyemi");
    }

    #[test]
    fn test_kyc_status_display_matches_wire_text() {
        assert_eq!(KycStatus::Tier2Verified.to_string(), "Tier 2 Verified");
        assert_eq!(
            "Awaiting KYC Review".parse::<KycStatus>().unwrap(),
            KycStatus::AwaitingReview
        );
        assert!(KycStatus::Tier1Verified.is_verified());
        assert!(!KycStatus::Unverified.is_verified());
    }
}
