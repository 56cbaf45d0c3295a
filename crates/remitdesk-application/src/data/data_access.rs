use super::cache::QueryCache;
use remitdesk_core::ApiResult;
use remitdesk_core::agent::{Agent, AgentTier};
use remitdesk_core::business::Business;
use remitdesk_core::currency::{CountryCurrency, CurrencyRoute};
use remitdesk_core::repository::{AdminRepository, EntityKind};
use remitdesk_core::settlement::Settlement;
use remitdesk_core::transaction::Transaction;
use remitdesk_core::user::User;
use remitdesk_core::virtual_account::VirtualAccount;
use std::sync::Arc;

/// Cached reads over the composed [`AdminRepository`].
///
/// Each collection has its own cache keyed by [`EntityKind`]. Detail lookups
/// are not cached.
pub struct DataAccess {
    repository: Arc<dyn AdminRepository>,
    users: QueryCache<Vec<User>>,
    businesses: QueryCache<Vec<Business>>,
    agents: QueryCache<Vec<Agent>>,
    agent_tiers: QueryCache<Vec<AgentTier>>,
    transactions: QueryCache<Vec<Transaction>>,
    settlements: QueryCache<Vec<Settlement>>,
    virtual_accounts: QueryCache<Vec<VirtualAccount>>,
    country_currencies: QueryCache<Vec<CountryCurrency>>,
    routes: QueryCache<Vec<CurrencyRoute>>,
}

impl DataAccess {
    pub fn new(repository: Arc<dyn AdminRepository>) -> Self {
        Self {
            repository,
            users: QueryCache::new(),
            businesses: QueryCache::new(),
            agents: QueryCache::new(),
            agent_tiers: QueryCache::new(),
            transactions: QueryCache::new(),
            settlements: QueryCache::new(),
            virtual_accounts: QueryCache::new(),
            country_currencies: QueryCache::new(),
            routes: QueryCache::new(),
        }
    }

    pub fn repository(&self) -> &Arc<dyn AdminRepository> {
        &self.repository
    }

    pub async fn users(&self) -> ApiResult<Vec<User>> {
        self.users
            .get_or_fetch(EntityKind::Users.as_ref(), || self.repository.list_users())
            .await
    }

    pub async fn businesses(&self) -> ApiResult<Vec<Business>> {
        self.businesses
            .get_or_fetch(EntityKind::Businesses.as_ref(), || self.repository.list_businesses())
            .await
    }

    pub async fn agents(&self) -> ApiResult<Vec<Agent>> {
        self.agents
            .get_or_fetch(EntityKind::Agents.as_ref(), || self.repository.list_agents())
            .await
    }

    pub async fn agent_tiers(&self) -> ApiResult<Vec<AgentTier>> {
        self.agent_tiers
            .get_or_fetch(EntityKind::AgentTiers.as_ref(), || self.repository.list_agent_tiers())
            .await
    }

    pub async fn transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.transactions
            .get_or_fetch(EntityKind::Transactions.as_ref(), || self.repository.list_transactions())
            .await
    }

    pub async fn settlements(&self) -> ApiResult<Vec<Settlement>> {
        self.settlements
            .get_or_fetch(EntityKind::Settlements.as_ref(), || self.repository.list_settlements())
            .await
    }

    pub async fn virtual_accounts(&self) -> ApiResult<Vec<VirtualAccount>> {
        self.virtual_accounts
            .get_or_fetch(EntityKind::VirtualAccounts.as_ref(), || self.repository.list_virtual_accounts())
            .await
    }

    pub async fn country_currencies(&self) -> ApiResult<Vec<CountryCurrency>> {
        self.country_currencies
            .get_or_fetch(EntityKind::CountryCurrencies.as_ref(), || self.repository.list_country_currencies())
            .await
    }

    pub async fn routes(&self) -> ApiResult<Vec<CurrencyRoute>> {
        self.routes
            .get_or_fetch(EntityKind::Routes.as_ref(), || self.repository.list_routes())
            .await
    }

    pub async fn user(&self, id: &str) -> ApiResult<Option<User>> {
        self.repository.find_user(id).await
    }

    pub async fn business(&self, id: &str) -> ApiResult<Option<Business>> {
        self.repository.find_business(id).await
    }

    pub async fn agent(&self, id: &str) -> ApiResult<Option<Agent>> {
        self.repository.find_agent(id).await
    }

    pub async fn transaction(&self, id: &str) -> ApiResult<Option<Transaction>> {
        self.repository.find_transaction(id).await
    }

    pub async fn settlement(&self, id: &str) -> ApiResult<Option<Settlement>> {
        self.repository.find_settlement(id).await
    }

    pub async fn virtual_account(&self, id: &str) -> ApiResult<Option<VirtualAccount>> {
        self.repository.find_virtual_account(id).await
    }

    /// Drops the cached list for `entity`.
    pub async fn invalidate(&self, entity: EntityKind) {
        let key = entity.as_ref();
        match entity {
            EntityKind::Users => self.users.invalidate(key).await,
            EntityKind::Businesses => self.businesses.invalidate(key).await,
            EntityKind::Agents => self.agents.invalidate(key).await,
            EntityKind::AgentTiers => self.agent_tiers.invalidate(key).await,
            EntityKind::Transactions => self.transactions.invalidate(key).await,
            EntityKind::Settlements => self.settlements.invalidate(key).await,
            EntityKind::VirtualAccounts => self.virtual_accounts.invalidate(key).await,
            EntityKind::CountryCurrencies => self.country_currencies.invalidate(key).await,
            EntityKind::Routes => self.routes.invalidate(key).await,
        }
    }

    /// Drops every cached list, e.g. after the operator signs out.
    pub async fn clear(&self) {
        self.users.clear().await;
        self.businesses.clear().await;
        self.agents.clear().await;
        self.agent_tiers.clear().await;
        self.transactions.clear().await;
        self.settlements.clear().await;
        self.virtual_accounts.clear().await;
        self.country_currencies.clear().await;
        self.routes.clear().await;
    }
}
