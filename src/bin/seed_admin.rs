//! Creates the administrator account.
//!
//! Credentials come from `ADMIN_USERNAME`, `ADMIN_EMAIL` and `ADMIN_PASSWORD`, or from
//! positional arguments in the same order. Arguments win over the environment.

use anyhow::{anyhow, Context};
use sea_orm::Database;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_api::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use portfolio_api::auth::adapter::outgoing::security::{
    Argon2Hasher, Argon2Params, LegacyAwareHasher,
};
use portfolio_api::auth::application::ports::incoming::use_cases::{
    SeedAdminRequest, SeedAdminUseCase,
};
use portfolio_api::auth::application::services::SeedAdminService;

fn credential(args: &[String], index: usize, key: &str) -> anyhow::Result<String> {
    args.get(index)
        .cloned()
        .or_else(|| std::env::var(key).ok())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("{key} must be set (or passed as argument {})", index + 1))
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = SeedAdminRequest {
        username: credential(&args, 0, "ADMIN_USERNAME")?,
        email: credential(&args, 1, "ADMIN_EMAIL")?,
        password: credential(&args, 2, "ADMIN_PASSWORD")?,
    };

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = Arc::new(
        Database::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    let hasher = LegacyAwareHasher::new(
        Argon2Hasher::new(Argon2Params::default()).context("Invalid Argon2 parameters")?,
    );
    let service = SeedAdminService::new(AdminRepositoryPostgres::new(db), Arc::new(hasher));

    match service.execute(request).await {
        Ok(admin) => {
            info!(admin_id = %admin.id, username = %admin.username, email = %admin.email, "Admin created");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Admin seeding failed");
            Err(e.into())
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error seeding admin: {e:#}");
        std::process::exit(1);
    }
}
