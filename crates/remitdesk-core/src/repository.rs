//! Admin data repository.
//!
//! One trait covers every read and mutation the console performs. The
//! composition root picks a single implementation (simulated or HTTP) so
//! call sites never branch on the simulation switch themselves.

use crate::agent::{Agent, AgentTier};
use crate::api::ApiResult;
use crate::business::Business;
use crate::currency::{CountryCurrency, CurrencyRoute};
use crate::settlement::Settlement;
use crate::transaction::{Transaction, TransactionStatus};
use crate::user::User;
use crate::virtual_account::VirtualAccount;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Collections served by the repository. Also used as cache keys.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EntityKind {
    Users,
    Businesses,
    Agents,
    AgentTiers,
    Transactions,
    Settlements,
    VirtualAccounts,
    CountryCurrencies,
    Routes,
}

/// A state-changing operation on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum AdminAction {
    ApproveKyc { user_id: String },
    BlockUser { user_id: String },
    UnblockUser { user_id: String },
    ApproveKyb { business_id: String },
    DeclineKyb { business_id: String },
    BlockBusiness { business_id: String },
    UnblockBusiness { business_id: String },
    UpdateTransactionStatus {
        transaction_id: String,
        status: TransactionStatus,
    },
}

impl AdminAction {
    /// The collection whose cached reads become stale after this action.
    pub fn entity(&self) -> EntityKind {
        match self {
            AdminAction::ApproveKyc { .. }
            | AdminAction::BlockUser { .. }
            | AdminAction::UnblockUser { .. } => EntityKind::Users,
            AdminAction::ApproveKyb { .. }
            | AdminAction::DeclineKyb { .. }
            | AdminAction::BlockBusiness { .. }
            | AdminAction::UnblockBusiness { .. } => EntityKind::Businesses,
            AdminAction::UpdateTransactionStatus { .. } => EntityKind::Transactions,
        }
    }

    /// Id of the record the action targets.
    pub fn target_id(&self) -> &str {
        match self {
            AdminAction::ApproveKyc { user_id }
            | AdminAction::BlockUser { user_id }
            | AdminAction::UnblockUser { user_id } => user_id,
            AdminAction::ApproveKyb { business_id }
            | AdminAction::DeclineKyb { business_id }
            | AdminAction::BlockBusiness { business_id }
            | AdminAction::UnblockBusiness { business_id } => business_id,
            AdminAction::UpdateTransactionStatus { transaction_id, .. } => transaction_id,
        }
    }

    /// Status the target ends up in, as display text.
    pub fn resulting_status(&self) -> String {
        match self {
            AdminAction::ApproveKyc { .. } => "Tier 1 Verified".to_string(),
            AdminAction::ApproveKyb { .. } => "Verified".to_string(),
            AdminAction::DeclineKyb { .. } => "Declined".to_string(),
            AdminAction::BlockUser { .. } | AdminAction::BlockBusiness { .. } => {
                "Blocked".to_string()
            }
            AdminAction::UnblockUser { .. } | AdminAction::UnblockBusiness { .. } => {
                "Active".to_string()
            }
            AdminAction::UpdateTransactionStatus { status, .. } => status.to_string(),
        }
    }
}

/// Outcome of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReceipt {
    pub entity: EntityKind,
    pub id: String,
    pub status: String,
    pub message: String,
    /// True when the receipt came from the simulator.
    #[serde(default)]
    pub simulated: bool,
}

/// Reads and mutations over the admin API.
///
/// `find_*` return `Ok(None)` when the id is unknown.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn list_users(&self) -> ApiResult<Vec<User>>;
    async fn find_user(&self, id: &str) -> ApiResult<Option<User>>;

    async fn list_businesses(&self) -> ApiResult<Vec<Business>>;
    async fn find_business(&self, id: &str) -> ApiResult<Option<Business>>;

    async fn list_agents(&self) -> ApiResult<Vec<Agent>>;
    async fn find_agent(&self, id: &str) -> ApiResult<Option<Agent>>;
    async fn list_agent_tiers(&self) -> ApiResult<Vec<AgentTier>>;

    async fn list_transactions(&self) -> ApiResult<Vec<Transaction>>;
    async fn find_transaction(&self, id: &str) -> ApiResult<Option<Transaction>>;

    async fn list_settlements(&self) -> ApiResult<Vec<Settlement>>;
    async fn find_settlement(&self, id: &str) -> ApiResult<Option<Settlement>>;

    async fn list_virtual_accounts(&self) -> ApiResult<Vec<VirtualAccount>>;
    async fn find_virtual_account(&self, id: &str) -> ApiResult<Option<VirtualAccount>>;

    async fn list_country_currencies(&self) -> ApiResult<Vec<CountryCurrency>>;
    async fn list_routes(&self) -> ApiResult<Vec<CurrencyRoute>>;

    /// Applies `action` and reports the resulting status.
    async fn apply(&self, action: &AdminAction) -> ApiResult<ActionReceipt>;
}
