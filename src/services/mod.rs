pub mod api_client;
pub mod endpoints;

pub use api_client::ApiClient;
pub use endpoints::DashboardScope;
