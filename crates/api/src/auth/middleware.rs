//! Bearer-token middleware for Axum
//!
//! Billing routes require an `Authorization: Bearer ...` header. Token
//! validation and resolution to a user identity belong to the auth service
//! in front of this API; here the token is only checked for presence and
//! shape.

use axum::{
    extract::Request, http::header::AUTHORIZATION, middleware::Next, response::Response,
};

use crate::error::ApiError;

/// Bearer token as presented by the caller, made available to downstream
/// handlers via request extensions.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Reject requests without a well-formed bearer token.
///
/// TODO: validate the token and resolve it to a user/customer identity once
/// the auth middleware is wired up. Handlers currently ignore the token.
pub async fn require_bearer(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;
    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }
    let token = token.to_string();

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
