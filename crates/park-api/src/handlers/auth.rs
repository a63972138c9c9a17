//! Authentication handlers
//!
//! Endpoints for signup, login, token refresh, and logout.

use axum::{extract::State, http::header, http::HeaderMap};
use park_service::dto::{
    LoginRequest, MessageResponse, SignupRequest, SignupResponse, TokenResponse,
};
use park_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<ApiJson<SignupResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiJson<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiJson(response))
}

/// Rotate a refresh token into a fresh pair
///
/// POST /auth/refresh
///
/// The refresh token travels in the Authorization header as
/// `Bearer <refreshToken>`; anything else is a malformed request.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<ApiJson<TokenResponse>> {
    let token = extract_bearer(&headers)?;

    let service = AuthService::new(state.service_context());
    let response = service.refresh(token).await?;
    Ok(ApiJson(response))
}

/// Logout the authenticated user
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id).await?;
    Ok(ApiJson(MessageResponse::new("Logged out")))
}

/// Pull the raw bearer token out of the Authorization header
fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::malformed("Missing Authorization header"))?
        .to_str()
        .map_err(|_| ApiError::malformed("Authorization header is not valid UTF-8"))?;

    value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::malformed("Authorization header must be 'Bearer <token>'"))
}
