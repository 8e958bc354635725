//! Shared setup for the mock-server tests

#![allow(dead_code)]

use reddwarf_client::ReddwarfClient;
use reddwarf_core::config::{Config, Zone};
use wiremock::MockServer;

pub const ZONE: &str = "RegionOne";
pub const TENANT: &str = "3456";
pub const TOKEN: &str = "Auth_4f173437e4b013bee56d1007";
pub const INSTANCE: &str = "instanceId-1234-5678";

/// `/v1/3456` followed by `suffix`
pub fn api_path(suffix: &str) -> String {
    format!("/v1/{TENANT}{suffix}")
}

/// A client whose only zone points at `server`
pub fn client_for(server: &MockServer) -> ReddwarfClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut config = Config {
        default_zone: Some(ZONE.to_string()),
        tenant_id: Some(TENANT.to_string()),
        auth_token: Some(TOKEN.to_string()),
        ..Config::default()
    };
    config.set_zone(ZONE, Zone::new(format!("{}/v1", server.uri())));
    ReddwarfClient::new(config).expect("client builds")
}
