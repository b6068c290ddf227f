//! JWT Claims model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::constants::ERR_INVALID_TOKEN;
use crate::errors::ApiError;

/// JWT Claims structure.
///
/// Tokens are stateless: the user identity is the only thing they encode,
/// and expiry is enforced by the signature check.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Hex-encoded user ObjectId
    pub sub: String,
    /// Issued-at timestamp
    pub iat: usize,
    /// Expiration timestamp
    pub exp: usize,
}

impl Claims {
    /// Parse the subject back into a user ObjectId.
    pub fn user_id(&self) -> Result<ObjectId, ApiError> {
        ObjectId::parse_str(&self.sub)
            .map_err(|_| ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parses_valid_hex() {
        let id = ObjectId::new();
        let claims = Claims {
            sub: id.to_hex(),
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.user_id().unwrap(), id);
    }

    #[test]
    fn test_user_id_rejects_garbage() {
        let claims = Claims {
            sub: "not-an-object-id".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(
            claims.user_id(),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
