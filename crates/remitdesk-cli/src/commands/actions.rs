use super::output::print_json;
use super::records::require_session;
use anyhow::Result;
use remitdesk_application::{AppContext, Route, Section};
use remitdesk_core::ApiResult;
use remitdesk_core::repository::{ActionReceipt, EntityKind};
use std::future::Future;

/// Runs an admin mutation once the session is confirmed and prints its receipt.
pub async fn run<F>(context: &AppContext, entity: EntityKind, action: F) -> Result<()>
where
    F: Future<Output = ApiResult<ActionReceipt>>,
{
    require_session(context, &Route::Section(Section::for_entity(entity)))?;

    let receipt = context.track(action.await)?;
    if receipt.simulated && !context.use_mock() {
        tracing::warn!("Backend unavailable for this action; showing simulated result");
    }
    print_json(&receipt)
}
