//! Identity extractors.
//!
//! Authentication itself is out of scope for this service: requests arrive
//! through an authenticating reverse proxy that resolves the session and
//! forwards the caller's identity as headers. These extractors only read
//! and validate those headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roomease_core::types::DbId;
use roomease_core::CoreError;

use crate::error::AppError;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the authenticated user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Role value granting access to the admin routes.
const ROLE_ADMIN: &str = "admin";

/// The authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
}

/// The authenticated caller, verified to hold the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: DbId,
}

fn user_id_from_parts(parts: &Parts) -> Result<DbId, AppError> {
    let value = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::Unauthorized(format!("missing {USER_ID_HEADER} header")))?;
    value
        .to_str()
        .ok()
        .and_then(|s| s.parse::<DbId>().ok())
        .ok_or_else(|| AppError::Unauthorized(format!("invalid {USER_ID_HEADER} header")))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = user_id_from_parts(parts)?;
        Ok(AuthUser { user_id })
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = user_id_from_parts(parts)?;

        let is_admin = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|role| role.eq_ignore_ascii_case(ROLE_ADMIN))
            .unwrap_or(false);

        if !is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Administrator role required.".to_string(),
            )));
        }

        Ok(AdminUser { user_id })
    }
}
