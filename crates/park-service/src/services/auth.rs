//! Authentication service
//!
//! Handles user signup, login, token refresh, and logout. A user holds at
//! most one session; issuing a new refresh token supersedes the previous one.

use park_common::auth::{hash_password, validate_password_strength, verify_password};
use park_common::AppError;
use park_core::entities::NewUser;
use park_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, SignupRequest, SignupResponse, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser::new(request.email, request.name, password_hash);
        let user = self.ctx.user_repo().create(&new_user).await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(SignupResponse { user_id: user.id })
    }

    /// Login with email and password
    ///
    /// On success the user's session row is atomically replaced, so any
    /// previously issued refresh token stops working.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::Domain(DomainError::UserEmailNotFound(request.email.clone()))
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Generate tokens and persist the refresh token as the user's only session
        let token_pair = self
            .ctx
            .jwt_service()
            .issue_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .session_repo()
            .replace(user.id, &token_pair.refresh_token)
            .await?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(TokenResponse::from(token_pair))
    }

    /// Rotate a refresh token into a fresh token pair
    ///
    /// The presented token must pass signature and expiry validation and must
    /// equal the stored session row; a superseded or logged-out token fails
    /// with `InvalidToken`.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)
            .map_err(ServiceError::from)?;

        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::UserNotFound(user_id)))?;

        // The token must match the current session record
        let session = self
            .ctx
            .session_repo()
            .find_by_user(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Refresh failed: no active session");
                ServiceError::App(AppError::InvalidToken)
            })?;

        if !session.matches(refresh_token) {
            warn!(user_id = user.id, "Refresh failed: token superseded");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let token_pair = self
            .ctx
            .jwt_service()
            .issue_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .session_repo()
            .replace(user.id, &token_pair.refresh_token)
            .await?;

        info!(user_id = user.id, "Tokens refreshed successfully");

        Ok(TokenResponse::from(token_pair))
    }

    /// Logout a user by deleting their session; idempotent
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.session_repo().delete_by_user(user_id).await?;

        info!(user_id = user_id, "User logged out successfully");
        Ok(())
    }
}
