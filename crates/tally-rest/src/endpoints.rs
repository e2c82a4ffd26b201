//! Backend endpoint paths and wire types.

use serde::{Deserialize, Serialize};

/// Endpoint for obtaining a token pair (login).
pub(crate) const TOKEN_OBTAIN: &str = "token/";

/// Endpoint for refreshing an access token.
pub(crate) const TOKEN_REFRESH: &str = "token/refresh/";

/// Endpoint for account registration.
pub(crate) const REGISTER: &str = "register/";

/// Endpoint for the item collection.
pub(crate) const ITEMS: &str = "items/";

/// Endpoint for the category collection.
pub(crate) const CATEGORIES: &str = "categories/";

/// Returns the detail path for a single item.
pub(crate) fn item_detail(id: i64) -> String {
    format!("items/{}/", id)
}

/// Request body for the token obtain endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct TokenObtainRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from the token obtain endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenObtainResponse {
    pub access: String,
    pub refresh: String,
}

/// Request body for the token refresh endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the token refresh endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenRefreshResponse {
    pub access: String,
}

/// Request body for registration.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
