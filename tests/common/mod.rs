//! Test utilities and common setup.

use fmeflow_client::FmeFlowClient;
use mockito::ServerGuard;

/// Token every test client authenticates with.
pub const TOKEN: &str = "test-token";

/// Start a mock server and a client pointed at it.
pub async fn test_client() -> (ServerGuard, FmeFlowClient) {
    let server = mockito::Server::new_async().await;
    let client = FmeFlowClient::new(server.url(), TOKEN).unwrap();
    (server, client)
}
