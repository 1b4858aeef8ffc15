use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::JwtManager, error::AppError};

/// Admin identity injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub admin_id: String,
    pub email: String,
}

/// Guards the back-office routes with an admin bearer token
pub async fn admin_auth_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let claims = jwt_manager.validate_token(token)?;

    tracing::debug!(admin_id = %claims.sub, path = %request.uri().path(), "Admin request authorized");

    request.extensions_mut().insert(AdminUser {
        admin_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
