use crate::user::AccountStatus;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCurrency {
    pub id: String,
    pub country: String,
    /// ISO 4217 code.
    pub currency: String,
    pub payin_partner: String,
    pub payout_partner: String,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum RouteStatus {
    Published,
    Draft,
}

/// A currency corridor (e.g. CAD → NGN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRoute {
    pub id: String,
    pub source_currency: String,
    pub destination_currency: String,
    pub status: RouteStatus,
    pub send_enabled: bool,
    pub swap_enabled: bool,
    pub payin_partner: String,
    pub payout_partner: String,
}

impl CurrencyRoute {
    /// `"CAD/NGN"` style label.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.source_currency, self.destination_currency)
    }

    /// Published routes with sending switched on accept new transfers.
    pub fn accepts_transfers(&self) -> bool {
        self.status == RouteStatus::Published && self.send_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_route_does_not_accept_transfers() {
        let route = CurrencyRoute {
            id: "4".to_string(),
            source_currency: "GBP".to_string(),
            destination_currency: "NGN".to_string(),
            status: RouteStatus::Draft,
            send_enabled: true,
            swap_enabled: false,
            payin_partner: "Wise".to_string(),
            payout_partner: "Bank Transfer".to_string(),
        };
        assert_eq!(route.pair(), "GBP/NGN");
        assert!(!route.accepts_transfers());
    }
}
