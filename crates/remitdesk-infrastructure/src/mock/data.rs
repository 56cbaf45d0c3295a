//! Simulated admin data.

use super::{DATA_LATENCY, fixtures, simulate_latency};
use async_trait::async_trait;
use remitdesk_core::agent::{Agent, AgentTier};
use remitdesk_core::business::Business;
use remitdesk_core::currency::{CountryCurrency, CurrencyRoute};
use remitdesk_core::repository::{ActionReceipt, AdminAction, AdminRepository, EntityKind};
use remitdesk_core::settlement::Settlement;
use remitdesk_core::transaction::Transaction;
use remitdesk_core::user::User;
use remitdesk_core::virtual_account::VirtualAccount;
use remitdesk_core::{ApiError, ApiResult};
use std::time::Duration;

/// [`AdminRepository`] over the fixture collections.
///
/// Lists come back unfiltered and in fixture order. Actions check that the
/// target exists and report the status it would end up in; the fixtures
/// themselves never change.
#[derive(Debug, Clone)]
pub struct MockAdminRepository {
    latency: Duration,
}

impl Default for MockAdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdminRepository {
    pub fn new() -> Self {
        Self {
            latency: DATA_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn serve<T>(&self, records: Vec<T>) -> ApiResult<Vec<T>> {
        simulate_latency(self.latency).await;
        Ok(records)
    }

    async fn serve_one<T, F>(&self, records: Vec<T>, matches: F) -> ApiResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        simulate_latency(self.latency).await;
        Ok(records.into_iter().find(|r| matches(r)))
    }

    fn exists(entity: EntityKind, id: &str) -> bool {
        match entity {
            EntityKind::Users => fixtures::users().iter().any(|u| u.id == id),
            EntityKind::Businesses => fixtures::businesses().iter().any(|b| b.id == id),
            EntityKind::Transactions => fixtures::transactions().iter().any(|t| t.id == id),
            // No action targets these.
            EntityKind::Agents
            | EntityKind::AgentTiers
            | EntityKind::Settlements
            | EntityKind::VirtualAccounts
            | EntityKind::CountryCurrencies
            | EntityKind::Routes => false,
        }
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.serve(fixtures::users()).await
    }

    /// Returns the detail-view record.
    async fn find_user(&self, id: &str) -> ApiResult<Option<User>> {
        self.serve_one(fixtures::user_details(), |u| u.id == id).await
    }

    async fn list_businesses(&self) -> ApiResult<Vec<Business>> {
        self.serve(fixtures::businesses()).await
    }

    async fn find_business(&self, id: &str) -> ApiResult<Option<Business>> {
        self.serve_one(fixtures::businesses(), |b| b.id == id).await
    }

    async fn list_agents(&self) -> ApiResult<Vec<Agent>> {
        self.serve(fixtures::agents()).await
    }

    async fn find_agent(&self, id: &str) -> ApiResult<Option<Agent>> {
        self.serve_one(fixtures::agents(), |a| a.id == id).await
    }

    async fn list_agent_tiers(&self) -> ApiResult<Vec<AgentTier>> {
        self.serve(fixtures::agent_tiers()).await
    }

    async fn list_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.serve(fixtures::transactions()).await
    }

    async fn find_transaction(&self, id: &str) -> ApiResult<Option<Transaction>> {
        self.serve_one(fixtures::transactions(), |t| t.id == id).await
    }

    async fn list_settlements(&self) -> ApiResult<Vec<Settlement>> {
        self.serve(fixtures::settlements()).await
    }

    async fn find_settlement(&self, id: &str) -> ApiResult<Option<Settlement>> {
        self.serve_one(fixtures::settlements(), |s| s.id == id).await
    }

    async fn list_virtual_accounts(&self) -> ApiResult<Vec<VirtualAccount>> {
        self.serve(fixtures::virtual_accounts()).await
    }

    async fn find_virtual_account(&self, id: &str) -> ApiResult<Option<VirtualAccount>> {
        self.serve_one(fixtures::virtual_accounts(), |v| v.id == id)
            .await
    }

    async fn list_country_currencies(&self) -> ApiResult<Vec<CountryCurrency>> {
        self.serve(fixtures::country_currencies()).await
    }

    async fn list_routes(&self) -> ApiResult<Vec<CurrencyRoute>> {
        self.serve(fixtures::routes()).await
    }

    async fn apply(&self, action: &AdminAction) -> ApiResult<ActionReceipt> {
        simulate_latency(self.latency).await;

        let entity = action.entity();
        let id = action.target_id();
        if !Self::exists(entity, id) {
            return Err(ApiError::not_found(entity.as_ref(), id));
        }

        let status = action.resulting_status();
        tracing::debug!(entity = %entity, id, status = %status, "Simulated admin action");
        Ok(ActionReceipt {
            entity,
            id: id.to_string(),
            message: format!("{} {} is now {}", entity, id, status),
            status,
            simulated: true,
        })
    }
}
