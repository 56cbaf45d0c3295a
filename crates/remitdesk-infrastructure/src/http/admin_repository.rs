//! Entity endpoints over HTTP.

use super::client::ApiClient;
use async_trait::async_trait;
use remitdesk_core::agent::{Agent, AgentTier};
use remitdesk_core::business::Business;
use remitdesk_core::currency::{CountryCurrency, CurrencyRoute};
use remitdesk_core::repository::{ActionReceipt, AdminAction, AdminRepository};
use remitdesk_core::settlement::Settlement;
use remitdesk_core::transaction::Transaction;
use remitdesk_core::user::User;
use remitdesk_core::virtual_account::VirtualAccount;
use remitdesk_core::{ApiResponse, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// [`AdminRepository`] backed by the REST API through the private client.
///
/// Responses use the `{ error, data, message, ... }` envelope; reads unwrap
/// `data`, and a 404 on a detail read becomes `Ok(None)`. Mutations accept an
/// empty success body.
#[derive(Debug, Clone)]
pub struct HttpAdminRepository {
    client: ApiClient,
}

impl HttpAdminRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<Vec<T>> {
        let response: ApiResponse<Vec<T>> = self.client.get(segments).await?;
        Ok(response.data.unwrap_or_default())
    }

    async fn find<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<Option<T>> {
        match self.client.get::<ApiResponse<T>>(segments).await {
            Ok(response) => Ok(response.data),
            Err(e) if e.status == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AdminRepository for HttpAdminRepository {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.list(&["users"]).await
    }

    async fn find_user(&self, id: &str) -> ApiResult<Option<User>> {
        self.find(&["users", id]).await
    }

    async fn list_businesses(&self) -> ApiResult<Vec<Business>> {
        self.list(&["businesses"]).await
    }

    async fn find_business(&self, id: &str) -> ApiResult<Option<Business>> {
        self.find(&["businesses", id]).await
    }

    async fn list_agents(&self) -> ApiResult<Vec<Agent>> {
        self.list(&["agents"]).await
    }

    async fn find_agent(&self, id: &str) -> ApiResult<Option<Agent>> {
        self.find(&["agents", id]).await
    }

    async fn list_agent_tiers(&self) -> ApiResult<Vec<AgentTier>> {
        self.list(&["agents", "tiers"]).await
    }

    async fn list_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.list(&["transactions"]).await
    }

    async fn find_transaction(&self, id: &str) -> ApiResult<Option<Transaction>> {
        self.find(&["transactions", id]).await
    }

    async fn list_settlements(&self) -> ApiResult<Vec<Settlement>> {
        self.list(&["settlements"]).await
    }

    async fn find_settlement(&self, id: &str) -> ApiResult<Option<Settlement>> {
        self.find(&["settlements", id]).await
    }

    async fn list_virtual_accounts(&self) -> ApiResult<Vec<VirtualAccount>> {
        self.list(&["virtual-accounts"]).await
    }

    async fn find_virtual_account(&self, id: &str) -> ApiResult<Option<VirtualAccount>> {
        self.find(&["virtual-accounts", id]).await
    }

    async fn list_country_currencies(&self) -> ApiResult<Vec<CountryCurrency>> {
        self.list(&["country-currencies"]).await
    }

    async fn list_routes(&self) -> ApiResult<Vec<CurrencyRoute>> {
        self.list(&["routes"]).await
    }

    async fn apply(&self, action: &AdminAction) -> ApiResult<ActionReceipt> {
        let id = action.target_id();
        let response: Option<ApiResponse<Value>> = match action {
            AdminAction::ApproveKyc { .. } => {
                self.client
                    .post::<Value, _>(&["users", id, "approve-kyc"], None)
                    .await?
            }
            AdminAction::BlockUser { .. } => {
                self.client
                    .post::<Value, _>(&["users", id, "block"], None)
                    .await?
            }
            AdminAction::UnblockUser { .. } => {
                self.client
                    .post::<Value, _>(&["users", id, "unblock"], None)
                    .await?
            }
            AdminAction::ApproveKyb { .. } => {
                self.client
                    .post::<Value, _>(&["businesses", id, "approve-kyb"], None)
                    .await?
            }
            AdminAction::DeclineKyb { .. } => {
                self.client
                    .post::<Value, _>(&["businesses", id, "decline-kyb"], None)
                    .await?
            }
            AdminAction::BlockBusiness { .. } => {
                self.client
                    .post::<Value, _>(&["businesses", id, "block"], None)
                    .await?
            }
            AdminAction::UnblockBusiness { .. } => {
                self.client
                    .post::<Value, _>(&["businesses", id, "unblock"], None)
                    .await?
            }
            AdminAction::UpdateTransactionStatus { status, .. } => {
                self.client
                    .patch(&["transactions", id, "status"], &json!({ "status": status }))
                    .await?
            }
        };

        tracing::info!(entity = %action.entity(), id, "Applied admin action");
        Ok(ActionReceipt {
            entity: action.entity(),
            id: id.to_string(),
            status: action.resulting_status(),
            message: response
                .map(|r| r.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("{} {} updated", action.entity(), id)),
            simulated: false,
        })
    }
}
