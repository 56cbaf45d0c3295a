use anyhow::Result;
use clap::{Parser, Subcommand};
use remitdesk_application::{AppContext, ListQuery};
use remitdesk_core::repository::EntityKind;
use remitdesk_core::transaction::TransactionStatus;
use remitdesk_infrastructure::{ConfigService, RemitPaths};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "remitdesk")]
#[command(about = "remitdesk - admin console for the remittance platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as an administrator
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// One-time code (simulated login accepts 123456)
        #[arg(long)]
        otp: Option<String>,
    },
    /// Create an account with a temporary password
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Request a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password from a reset link
    ResetPassword {
        /// Token from the reset link
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the session and backend mode
    Status,
    /// List records of one kind
    List {
        entity: EntityKind,
        /// Case-insensitive text search
        #[arg(long)]
        search: Option<String>,
        /// Status filter ("all" disables it)
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = remitdesk_application::data::DEFAULT_PAGE_SIZE)]
        limit: usize,
    },
    /// Show one record
    Show { entity: EntityKind, id: String },
    /// Approve a user's KYC
    ApproveKyc { user_id: String },
    BlockUser { user_id: String },
    UnblockUser { user_id: String },
    /// Approve a business's KYB
    ApproveKyb { business_id: String },
    /// Decline a business's KYB
    DeclineKyb { business_id: String },
    BlockBusiness { business_id: String },
    UnblockBusiness { business_id: String },
    /// Change a transaction's status
    SetTransactionStatus {
        transaction_id: String,
        status: TransactionStatus,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let paths = RemitPaths::resolve()?;
    let config = ConfigService::new(&paths);
    init_tracing(&config.get_config().log_level);

    let context = AppContext::bootstrap(&paths, &config)?;

    match cli.command {
        Commands::Login {
            email,
            password,
            otp,
        } => commands::auth::login(&context, &email, &password, otp.as_deref()).await?,
        Commands::Register { email, password } => {
            commands::auth::register(&context, &email, &password).await?
        }
        Commands::ForgotPassword { email } => {
            commands::auth::forgot_password(&context, &email).await?
        }
        Commands::ResetPassword {
            token,
            password,
            confirm,
        } => commands::auth::reset_password(&context, token.as_deref(), &password, &confirm).await?,
        Commands::Logout => commands::auth::logout(&context).await,
        Commands::Status => commands::auth::status(&context)?,
        Commands::List {
            entity,
            search,
            status,
            page,
            limit,
        } => {
            let query = ListQuery {
                search,
                status,
                page,
                limit,
            };
            commands::records::list(&context, entity, &query).await?
        }
        Commands::Show { entity, id } => commands::records::show(&context, entity, &id).await?,
        Commands::ApproveKyc { user_id } => {
            let action = context.mutations().approve_kyc(&user_id);
            commands::actions::run(&context, EntityKind::Users, action).await?
        }
        Commands::BlockUser { user_id } => {
            let action = context.mutations().block_user(&user_id);
            commands::actions::run(&context, EntityKind::Users, action).await?
        }
        Commands::UnblockUser { user_id } => {
            let action = context.mutations().unblock_user(&user_id);
            commands::actions::run(&context, EntityKind::Users, action).await?
        }
        Commands::ApproveKyb { business_id } => {
            let action = context.mutations().approve_kyb(&business_id);
            commands::actions::run(&context, EntityKind::Businesses, action).await?
        }
        Commands::DeclineKyb { business_id } => {
            let action = context.mutations().decline_kyb(&business_id);
            commands::actions::run(&context, EntityKind::Businesses, action).await?
        }
        Commands::BlockBusiness { business_id } => {
            let action = context.mutations().block_business(&business_id);
            commands::actions::run(&context, EntityKind::Businesses, action).await?
        }
        Commands::UnblockBusiness { business_id } => {
            let action = context.mutations().unblock_business(&business_id);
            commands::actions::run(&context, EntityKind::Businesses, action).await?
        }
        Commands::SetTransactionStatus {
            transaction_id,
            status,
        } => {
            let action = context
                .mutations()
                .update_transaction_status(&transaction_id, status);
            commands::actions::run(&context, EntityKind::Transactions, action).await?
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
