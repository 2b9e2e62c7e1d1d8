//! Service-registry client. The registry learns this instance's network
//! location once at startup and is kept warm with heartbeats; it is never
//! consulted for anything else, and registry trouble is never fatal.

use std::time::Duration;

use serde::Serialize;
use tokio::{task::JoinHandle, time};
use tracing::{info, warn};

use crate::config::RegistryConfig;

#[derive(Clone, Serialize)]
struct Instance {
    name: String,
    host: String,
    port: u16,
}

pub fn spawn(service_name: String, config: RegistryConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let base = config.url.trim_end_matches('/').to_string();
        let instance = Instance {
            name: service_name,
            host: config.host,
            port: config.port,
        };

        let register_url = format!("{base}/services");
        match client.post(&register_url).json(&instance).send().await {
            Ok(response) if response.status().is_success() => {
                info!(name = %instance.name, url = %register_url, "registered with service registry");
            }
            Ok(response) => {
                warn!(status = %response.status(), url = %register_url, "service registry rejected registration");
            }
            Err(err) => {
                warn!(error = %err, url = %register_url, "could not reach service registry");
            }
        }

        let heartbeat_url = format!("{base}/services/{}/heartbeat", instance.name);
        let mut ticker = time::interval(Duration::from_secs(config.heartbeat_secs));
        // the first tick completes immediately; skip it so the initial
        // registration and the first heartbeat are not back to back
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = client.put(&heartbeat_url).json(&instance).send().await {
                warn!(error = %err, url = %heartbeat_url, "registry heartbeat failed");
            }
        }
    })
}
