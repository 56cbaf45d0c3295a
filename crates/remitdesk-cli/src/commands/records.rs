use super::output::print_json;
use anyhow::{Result, anyhow, bail};
use remitdesk_application::data::Listable;
use remitdesk_application::{AppContext, ListQuery, Route, Section};
use remitdesk_core::ApiResult;
use remitdesk_core::repository::EntityKind;
use serde::Serialize;

/// Fails unless the session may open `route`.
pub(crate) fn require_session(context: &AppContext, route: &Route) -> Result<()> {
    if context.resolve_route(&route.path()) == Route::Login {
        bail!("Not signed in. Run `remitdesk login` first.");
    }
    Ok(())
}

pub async fn list(context: &AppContext, entity: EntityKind, query: &ListQuery) -> Result<()> {
    require_session(context, &Route::Section(Section::for_entity(entity)))?;

    let data = context.data();
    match entity {
        EntityKind::Users => print_page(context, data.users().await, query),
        EntityKind::Businesses => print_page(context, data.businesses().await, query),
        EntityKind::Agents => print_page(context, data.agents().await, query),
        EntityKind::AgentTiers => print_page(context, data.agent_tiers().await, query),
        EntityKind::Transactions => print_page(context, data.transactions().await, query),
        EntityKind::Settlements => print_page(context, data.settlements().await, query),
        EntityKind::VirtualAccounts => print_page(context, data.virtual_accounts().await, query),
        EntityKind::CountryCurrencies => {
            print_page(context, data.country_currencies().await, query)
        }
        EntityKind::Routes => print_page(context, data.routes().await, query),
    }
}

pub async fn show(context: &AppContext, entity: EntityKind, id: &str) -> Result<()> {
    if matches!(
        entity,
        EntityKind::AgentTiers | EntityKind::CountryCurrencies | EntityKind::Routes
    ) {
        return Err(no_detail_view(entity));
    }
    let section = Section::for_entity(entity);
    require_session(
        context,
        &Route::Detail {
            section,
            id: id.to_string(),
        },
    )?;

    let data = context.data();
    match entity {
        EntityKind::Users => print_record(context, entity, id, data.user(id).await),
        EntityKind::Businesses => print_record(context, entity, id, data.business(id).await),
        EntityKind::Agents => print_record(context, entity, id, data.agent(id).await),
        EntityKind::Transactions => print_record(context, entity, id, data.transaction(id).await),
        EntityKind::Settlements => print_record(context, entity, id, data.settlement(id).await),
        EntityKind::VirtualAccounts => {
            print_record(context, entity, id, data.virtual_account(id).await)
        }
        EntityKind::AgentTiers | EntityKind::CountryCurrencies | EntityKind::Routes => {
            Err(no_detail_view(entity))
        }
    }
}

fn no_detail_view(entity: EntityKind) -> anyhow::Error {
    anyhow!("{} have no detail view; use `remitdesk list {}`", entity, entity)
}

fn print_page<T>(context: &AppContext, result: ApiResult<Vec<T>>, query: &ListQuery) -> Result<()>
where
    T: Listable + Clone + Serialize,
{
    let records = context.track(result)?;
    print_json(&query.apply(&records))
}

fn print_record<T: Serialize>(
    context: &AppContext,
    entity: EntityKind,
    id: &str,
    result: ApiResult<Option<T>>,
) -> Result<()> {
    match context.track(result)? {
        Some(record) => print_json(&record),
        None => bail!("{} '{}' not found", entity, id),
    }
}
