//! Bearer-token request guard.
//!
//! Handlers that take an [`AuthUser`] argument require a valid JWT; the
//! extractor rejects the request with 401 before the handler body runs.
//! Handlers without the argument stay public, so read-only and protected
//! routes can share the same scope.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use mongodb::bson::oid::ObjectId;
use std::future::{ready, Ready};

use crate::constants::ERR_INVALID_AUTH_HEADER;
use crate::errors::ApiError;
use crate::services::auth_service::decode_token;

/// The authenticated caller, resolved from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: ObjectId,
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized(ERR_INVALID_AUTH_HEADER.to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized(ERR_INVALID_AUTH_HEADER.to_string()))?;

    let claims = decode_token(token)?;
    let id = claims.user_id()?;

    Ok(AuthUser { id })
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth_service::generate_token;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_missing_header_rejected() {
        let req = TestRequest::default().to_http_request();
        let result = AuthUser::extract(&req).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn test_non_bearer_header_rejected() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(AuthUser::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_invalid_token_rejected() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_http_request();
        assert!(matches!(
            AuthUser::extract(&req).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[actix_web::test]
    async fn test_valid_token_resolves_user() {
        let user_id = ObjectId::new();
        let token = generate_token(user_id).unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let auth = AuthUser::extract(&req).await.unwrap();
        assert_eq!(auth.id, user_id);
    }
}
