// HTTP client utilities
use crate::domain::error::ProviderError;
use reqwest::Client;

/// Create a default HTTP client with appropriate settings
pub fn create_client() -> Result<Client, ProviderError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("mytr/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
