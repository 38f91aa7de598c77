//! HTTP basic authentication for the admin routes.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::warn;

use crate::AppState;
use crate::error::ApiError;

/// Username and password accepted on the admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(
        &self,
        username: &str,
        password: &str,
    ) -> bool {
        self.username == username && self.password == password
    }
}

/// Decodes an `Authorization: Basic <base64(user:pass)>` header.
///
/// Returns `None` when the header is absent, uses another scheme, or does not
/// decode to a UTF-8 `user:pass` pair. The password may contain `:`.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Rejects the request with 401 unless it carries the admin credentials.
pub async fn admin_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some((username, password)) = basic_credentials(request.headers()) else {
        return Err(ApiError::Unauthorized("missing basic credentials".to_string()));
    };

    if !state.admin.matches(&username, &password) {
        warn!(%username, path = %request.uri().path(), "admin authentication failed");
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }

    Ok(next.run(request).await)
}
