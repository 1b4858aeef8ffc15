use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicecast_backend::controllers::{
    admin::AdminController, contact::ContactController, pricing::PricingController,
    quote::QuoteController, talent::TalentController,
};
use voicecast_backend::domain::{
    admin::AdminService, auth::JwtManager, contact::ContactService, pricing::PricingService,
    quote::QuoteService, talent::TalentService,
};
use voicecast_backend::infrastructure::config::{Config, LogFormat};
use voicecast_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use voicecast_backend::infrastructure::http::{create_router, start_http_server, AppControllers};
use voicecast_backend::infrastructure::repositories::{
    PgContactRepository, PgQuoteRepository, PgVoiceActorRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceCast Backend on {}:{}",
        config.host,
        config.port
    );

    if !config.is_development() && config.cors_allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS is empty, any origin is allowed");
    }

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    if config.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    tracing::info!("Instantiating repositories...");
    let actor_repo = Arc::new(PgVoiceActorRepository::new(pool.clone()));
    let quote_repo = Arc::new(PgQuoteRepository::new(pool.clone()));
    let contact_repo = Arc::new(PgContactRepository::new(pool.clone()));

    // 2. Services
    tracing::info!(
        catalogue_cache_enabled = config.catalogue_cache_enabled,
        "Instantiating services..."
    );
    let pricing_service = Arc::new(PricingService::new(actor_repo.clone()));
    let talent_service = Arc::new(TalentService::new(
        actor_repo.clone(),
        config.catalogue_cache_enabled,
        config.catalogue_cache_ttl(),
    ));
    let quote_service = Arc::new(QuoteService::new(
        pricing_service.clone(),
        quote_repo.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(contact_repo.clone()));
    let admin_service = Arc::new(AdminService::new(
        quote_repo,
        contact_repo,
        actor_repo,
    ));
    let jwt_manager = Arc::new(JwtManager::new(
        &config.admin_jwt_secret,
        config.admin_jwt_expiration_hours,
    ));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let controllers = AppControllers {
        talent: Arc::new(TalentController::new(talent_service.clone())),
        pricing: Arc::new(PricingController::new(pricing_service)),
        quote: Arc::new(QuoteController::new(quote_service)),
        contact: Arc::new(ContactController::new(contact_service)),
        admin: Arc::new(AdminController::new(admin_service, talent_service)),
    };

    let app = create_router(
        pool.clone(),
        jwt_manager,
        controllers,
        &config.cors_allowed_origins,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "voicecast_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
