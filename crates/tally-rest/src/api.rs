//! Typed surface for the inventory backend.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use tally_core::{
    AccessToken, ApiRequest, BaseUrl, Category, CredentialPair, CredentialStore, Credentials,
    Item, ItemDraft, Method, RefreshToken, Rejection, RequestDispatcher, Result,
    SessionExpiryHandler,
};

use crate::auth::AuthenticatedClient;
use crate::endpoints::{
    CATEGORIES, ITEMS, REGISTER, RegisterRequest, TOKEN_OBTAIN, TokenObtainRequest,
    TokenObtainResponse, item_detail,
};
use crate::http::RestDispatcher;
use crate::refresher::RestRefresher;

/// Typed client for the inventory backend.
///
/// Login and registration go straight through the dispatcher (they are
/// expected to succeed without a token); resource operations go through the
/// authenticated client and inherit its refresh-and-retry behavior.
#[derive(Clone)]
pub struct InventoryApi {
    dispatcher: RestDispatcher,
    client: AuthenticatedClient,
    store: Arc<dyn CredentialStore>,
}

impl InventoryApi {
    /// Create an API client over the given store and expiry handler.
    pub fn new(
        base: BaseUrl,
        store: Arc<dyn CredentialStore>,
        expiry: Arc<dyn SessionExpiryHandler>,
    ) -> Self {
        let dispatcher = RestDispatcher::new(base);
        let refresher = Arc::new(RestRefresher::new(dispatcher.clone()));
        let client = AuthenticatedClient::new(
            Arc::new(dispatcher.clone()),
            refresher,
            store.clone(),
            expiry,
        );

        Self {
            dispatcher,
            client,
            store,
        }
    }

    /// Returns the authenticated client for untyped requests.
    pub fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// Authenticate and store the resulting credential pair.
    #[instrument(skip(self, credentials), fields(username = credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let request = ApiRequest::new(Method::Post, TOKEN_OBTAIN).json(&TokenObtainRequest {
            username: credentials.username(),
            password: credentials.password(),
        })?;

        let response = self.dispatcher.dispatch(&request).await?;
        if !response.is_success() {
            return Err(Rejection::from_body(response.status, &response.body).into());
        }

        let tokens: TokenObtainResponse = response.json()?;
        self.store.set_all(CredentialPair::new(
            AccessToken::new(tokens.access),
            Some(RefreshToken::new(tokens.refresh)),
        ));
        self.store.set_identity_hint(credentials.username());
        debug!("login succeeded");
        Ok(())
    }

    /// Register a new account. Does not log in.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<()> {
        let request =
            ApiRequest::new(Method::Post, REGISTER).json(&RegisterRequest { email, password })?;

        let response = self.dispatcher.dispatch(&request).await?;
        if !response.is_success() {
            return Err(Rejection::from_body(response.status, &response.body).into());
        }
        debug!("registration succeeded");
        Ok(())
    }

    /// List all inventory items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.client.request(Method::Get, ITEMS).await?.json()
    }

    /// Fetch a single item.
    pub async fn get_item(&self, id: i64) -> Result<Item> {
        self.client
            .request(Method::Get, &item_detail(id))
            .await?
            .json()
    }

    /// Create a new item.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<Item> {
        let request = ApiRequest::new(Method::Post, ITEMS).json(draft)?;
        self.client.send(request).await?.json()
    }

    /// Replace an existing item.
    pub async fn update_item(&self, id: i64, draft: &ItemDraft) -> Result<Item> {
        let request = ApiRequest::new(Method::Put, item_detail(id)).json(draft)?;
        self.client.send(request).await?.json()
    }

    /// Delete an item.
    pub async fn delete_item(&self, id: i64) -> Result<()> {
        self.client
            .request(Method::Delete, &item_detail(id))
            .await?;
        Ok(())
    }

    /// List all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.client.request(Method::Get, CATEGORIES).await?.json()
    }
}

impl fmt::Debug for InventoryApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryApi")
            .field("base", self.dispatcher.base())
            .finish_non_exhaustive()
    }
}
