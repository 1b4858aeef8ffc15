use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{
    admin::AdminController, contact::ContactController, health, pricing::PricingController,
    quote::QuoteController, talent::TalentController,
};
use crate::domain::auth::JwtManager;
use crate::infrastructure::auth::{admin_auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DatabaseProbe;

/// Everything the router needs to serve requests
#[derive(Clone)]
pub struct AppControllers {
    pub talent: Arc<TalentController>,
    pub pricing: Arc<PricingController>,
    pub quote: Arc<QuoteController>,
    pub contact: Arc<ContactController>,
    pub admin: Arc<AdminController>,
}

/// Build the application router with all routes and middleware
pub fn create_router(
    probe: Arc<dyn DatabaseProbe>,
    jwt_manager: Arc<JwtManager>,
    controllers: AppControllers,
    cors_allowed_origins: &[String],
) -> Router {
    // Public catalogue
    let talent_routes = Router::new()
        .route("/api/talents", get(TalentController::list_talents))
        .route("/api/talents/featured", get(TalentController::featured_talents))
        .route("/api/talents/:actorId", get(TalentController::get_talent))
        .with_state(controllers.talent.clone());

    // Public pricing
    let pricing_routes = Router::new()
        .route("/api/talents/:actorId/pricing", get(PricingController::get_rate_card))
        .route("/api/pricing/estimate", post(PricingController::estimate))
        .with_state(controllers.pricing.clone());

    let quote_routes = Router::new()
        .route("/api/quotes", post(QuoteController::submit_quote))
        .with_state(controllers.quote.clone());

    let contact_routes = Router::new()
        .route("/api/contact", post(ContactController::submit_contact))
        .with_state(controllers.contact.clone());

    // Back office (admin token required)
    let admin_routes = Router::new()
        .route("/admin/stats", get(AdminController::stats))
        .route(
            "/admin/actors",
            get(AdminController::list_actors).post(AdminController::create_actor),
        )
        .route(
            "/admin/actors/:id",
            put(AdminController::update_actor).delete(AdminController::delete_actor),
        )
        .route("/admin/actors/:id/pricing", put(AdminController::set_rate_card))
        .route("/admin/actors/:id/samples", post(AdminController::add_sample))
        .route(
            "/admin/samples/:id",
            put(AdminController::update_sample).delete(AdminController::delete_sample),
        )
        .with_state(controllers.admin.clone())
        .merge(
            Router::new()
                .route("/admin/quotes", get(QuoteController::list_quotes))
                .route("/admin/quotes/:id", patch(QuoteController::update_quote))
                .with_state(controllers.quote.clone()),
        )
        .merge(
            Router::new()
                .route("/admin/contacts", get(ContactController::list_contacts))
                .route("/admin/contacts/:id", patch(ContactController::update_contact))
                .with_state(controllers.contact.clone()),
        )
        .layer(middleware::from_fn_with_state(
            jwt_manager,
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(probe)
        .merge(talent_routes)
        .merge(pricing_routes)
        .merge(quote_routes)
        .merge(contact_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_allowed_origins))
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until the process is stopped
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
