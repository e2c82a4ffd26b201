//! tally-rest - reqwest-backed implementation of the tally client.

mod api;
mod auth;
mod endpoints;
mod http;
mod refresher;

pub use api::InventoryApi;
pub use auth::AuthenticatedClient;
pub use http::RestDispatcher;
pub use refresher::RestRefresher;
