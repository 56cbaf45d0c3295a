use super::output::print_json;
use anyhow::Result;
use remitdesk_application::AppContext;
use remitdesk_core::session::decode_claims;
use serde_json::json;

pub async fn login(
    context: &AppContext,
    email: &str,
    password: &str,
    otp: Option<&str>,
) -> Result<()> {
    let identity = context.auth().login(email, password, otp).await?;
    println!("Signed in as {} ({})", identity.email, identity.role);
    Ok(())
}

pub async fn register(context: &AppContext, email: &str, password: &str) -> Result<()> {
    let identity = context.auth().register(email, password).await?;
    println!("Account created for {}", identity.email);
    Ok(())
}

pub async fn forgot_password(context: &AppContext, email: &str) -> Result<()> {
    let message = context.auth().forgot_password(email).await?;
    println!("{}", message);
    Ok(())
}

pub async fn reset_password(
    context: &AppContext,
    token: Option<&str>,
    password: &str,
    confirm: &str,
) -> Result<()> {
    let message = context
        .auth()
        .reset_password(token, password, confirm)
        .await?;
    println!("{}", message);
    Ok(())
}

pub async fn logout(context: &AppContext) {
    context.auth().logout().await;
    println!("Signed out");
}

/// Session and backend summary. The token itself is never printed.
pub fn status(context: &AppContext) -> Result<()> {
    let storage = context.storage();
    let subject = storage
        .token()
        .and_then(|token| decode_claims(&token))
        .map(|claims| claims.sub);

    print_json(&json!({
        "mode": if context.use_mock() { "simulated" } else { "backend" },
        "apiUrl": context.settings().api_url,
        "authenticated": context.auth_state().is_authenticated(),
        "userId": storage.check_user_id().then(|| storage.user_id()),
        "role": storage.user_type(),
        "email": storage.user_email(),
        "tokenSubject": subject,
        "landing": context.resolve_route("/").path(),
    }))
}
