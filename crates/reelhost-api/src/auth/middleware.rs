use crate::auth::models::CurrentUser;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use reelhost_core::AppError;
use std::sync::Arc;

/// Validate the bearer credential and stash the caller identity in request
/// extensions for handlers to extract.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&request) {
        Ok(token) => token,
        Err(err) => return HttpAppError(err).into_response(),
    };

    let user_id = match state.jwt.validate_jwt(token) {
        Ok(user_id) => user_id,
        Err(err) => return HttpAppError(err).into_response(),
    };

    request.extensions_mut().insert(CurrentUser { user_id });
    next.run(request).await
}

fn bearer_token(request: &Request) -> Result<&str, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/videos");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_extraction() {
        let request = request_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&request).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_rejected() {
        let request = request_with_auth(None);
        assert!(matches!(
            bearer_token(&request),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let request = request_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert!(matches!(
            bearer_token(&request),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_empty_bearer_rejected() {
        let request = request_with_auth(Some("Bearer "));
        assert!(matches!(
            bearer_token(&request),
            Err(AppError::Unauthorized(_))
        ));
    }
}
