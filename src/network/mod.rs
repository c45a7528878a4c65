pub mod api;
pub mod client;
pub mod transport;

pub use api::SessionApi;
pub use client::ChatClient;
pub use transport::build_http_client;
