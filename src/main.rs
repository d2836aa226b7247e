use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_api::api::openapi::ApiDoc;
use portfolio_api::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use portfolio_api::auth::adapter::outgoing::jwt::JwtTokenService;
use portfolio_api::auth::adapter::outgoing::security::{Argon2Hasher, LegacyAwareHasher};
use portfolio_api::auth::application::auth_use_cases::AuthUseCases;
use portfolio_api::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use portfolio_api::auth::application::services::{LoginAdminService, ResolveAdminService};
use portfolio_api::config::AppConfig;
use portfolio_api::education::adapter::outgoing::EducationRepositoryPostgres;
use portfolio_api::education::application::education_use_cases::EducationUseCases;
use portfolio_api::education::application::service::EducationService;
use portfolio_api::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use portfolio_api::experience::application::experience_use_cases::ExperienceUseCases;
use portfolio_api::experience::application::service::ExperienceService;
use portfolio_api::init_routes;
use portfolio_api::project::adapter::outgoing::ProjectRepositoryPostgres;
use portfolio_api::project::application::project_use_cases::ProjectUseCases;
use portfolio_api::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, GetProjectsService,
    UpdateProjectService,
};
use portfolio_api::shared::api::custom_json_config;
use portfolio_api::shared::storage::{FileStorage, LocalDiskStorage, UploadPolicy};
use portfolio_api::skill::adapter::outgoing::SkillRepositoryPostgres;
use portfolio_api::skill::application::service::SkillService;
use portfolio_api::skill::application::skill_use_cases::SkillUseCases;
use portfolio_api::AppState;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );
    info!("Connected to database");

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", config.upload_dir.display()))?;

    // Shared adapters
    let storage: Arc<dyn FileStorage + Send + Sync> =
        Arc::new(LocalDiskStorage::new(config.upload_dir.clone()));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(LegacyAwareHasher::new(
        Argon2Hasher::new(config.argon2).context("Invalid Argon2 parameters")?,
    ));

    // Auth
    let auth = AuthUseCases {
        login: Arc::new(LoginAdminService::new(
            AdminQueryPostgres::new(Arc::clone(&db)),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        resolve_admin: Arc::new(ResolveAdminService::new(AdminQueryPostgres::new(
            Arc::clone(&db),
        ))),
    };

    // Projects
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            Arc::clone(&storage),
        )),
        get_list: Arc::new(GetProjectsService::new(project_repo.clone())),
        get_single: Arc::new(GetProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(
            project_repo.clone(),
            Arc::clone(&storage),
        )),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Skills
    let skill_service = Arc::new(SkillService::new(
        SkillRepositoryPostgres::new(Arc::clone(&db)),
        Arc::clone(&storage),
    ));
    let skill = SkillUseCases {
        create: skill_service.clone(),
        get_list: skill_service.clone(),
        get_single: skill_service.clone(),
        update: skill_service.clone(),
        delete: skill_service,
    };

    // Education
    let education_service = Arc::new(EducationService::new(EducationRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let education = EducationUseCases {
        create: education_service.clone(),
        list: education_service.clone(),
        update: education_service.clone(),
        delete: education_service,
    };

    // Experience
    let experience_service = Arc::new(ExperienceService::new(
        ExperienceRepositoryPostgres::new(Arc::clone(&db)),
    ));
    let experience = ExperienceUseCases {
        create: experience_service.clone(),
        list: experience_service.clone(),
        update: experience_service.clone(),
        delete: experience_service,
    };

    let state = AppState {
        auth,
        project,
        skill,
        education,
        experience,
        upload_policy: UploadPolicy::new(config.max_upload_bytes),
    };

    let client_url = config.client_url.clone();
    let upload_dir = config.upload_dir.clone();

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_url)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .service(Files::new(LocalDiskStorage::PUBLIC_PREFIX, upload_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
