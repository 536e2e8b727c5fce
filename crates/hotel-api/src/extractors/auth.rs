//! Authentication extractor
//!
//! Validates the bearer token and yields the calling [`Actor`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hotel_core::{Actor, RecordId, Role};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the JWT
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub actor: Actor,
}

impl AuthUser {
    pub fn user_id(&self) -> RecordId {
        self.actor.user_id
    }

    pub fn role(&self) -> Role {
        self.actor.role
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let actor = app_state
            .jwt_service()
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        Ok(AuthUser { actor })
    }
}
