use crate::user::AccountStatus;
use serde::{Deserialize, Serialize};

/// A referral agent and their running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub email: String,
    pub total_transactions: u64,
    #[serde(rename = "totalVolumeCAD")]
    pub total_volume_cad: f64,
    pub lifetime_earnings: f64,
    pub earnings_this_week: f64,
}

/// Commission band applied to agents by volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTier {
    pub id: String,
    pub tier_name: String,
    pub min_volume: f64,
    pub max_volume: f64,
    #[serde(rename = "commissionPerCAD")]
    pub commission_per_cad: f64,
    pub duration: String,
    pub status: AccountStatus,
}

impl AgentTier {
    /// Whether `volume` (CAD) falls inside this tier's band.
    pub fn covers(&self, volume: f64) -> bool {
        volume >= self.min_volume && volume <= self.max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_uses_cad_suffixed_field_names() {
        let agent: Agent = serde_json::from_value(json!({
            "id": "1",
            "email": "agent1@example.com",
            "totalTransactions": 245,
            "totalVolumeCAD": 125000,
            "lifetimeEarnings": 9375,
            "earningsThisWeek": 450
        }))
        .unwrap();
        assert_eq!(agent.total_volume_cad, 125000.0);
    }

    #[test]
    fn test_tier_band_is_inclusive() {
        let tier = AgentTier {
            id: "1".to_string(),
            tier_name: "Bronze Tier".to_string(),
            min_volume: 1000.0,
            max_volume: 5000.0,
            commission_per_cad: 0.05,
            duration: "1 year".to_string(),
            status: AccountStatus::Active,
        };
        assert!(tier.covers(1000.0));
        assert!(tier.covers(5000.0));
        assert!(!tier.covers(5000.5));
    }
}
