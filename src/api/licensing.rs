//
//  fmeflow-client
//  api/licensing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Licensing and machine identification resources.
//!
//! License state changes rarely, so unlike the other managers this one
//! memoizes: each value is fetched on first access and then served from
//! the manager for its lifetime. A failed fetch is not cached, the next
//! access retries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::api::common::null_to_empty;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Endpoint prefix for the licensing resource family.
const ENDPOINT_BASE: &str = "/licensing";

/// License status document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseStatus {
    /// Whether the server currently holds a valid license.
    #[serde(default)]
    pub is_licensed: bool,

    /// License expiry date, if the server reports one.
    #[serde(default)]
    pub expiry_date: Option<String>,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Machine key document used for license requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineKey {
    /// The machine key string itself.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub machine_key: String,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire envelope for the system code endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SystemCodeEnvelope {
    system_code: String,
}

/// Manager for the `/licensing` resource family.
///
/// Obtained from [`FmeFlowClient::licensing`](crate::FmeFlowClient::licensing).
/// Each accessor hits the server once and then answers from the cached
/// value for the manager's lifetime.
#[derive(Debug)]
pub struct LicensingManager {
    transport: Arc<Transport>,
    capabilities: OnceCell<Value>,
    status: OnceCell<LicenseStatus>,
    machine_key: OnceCell<MachineKey>,
    system_code: OnceCell<String>,
}

impl LicensingManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            transport,
            capabilities: OnceCell::new(),
            status: OnceCell::new(),
            machine_key: OnceCell::new(),
            system_code: OnceCell::new(),
        }
    }

    /// The server's license capability document.
    ///
    /// Capability layouts differ between server editions, so this is a raw
    /// JSON value rather than a typed record.
    pub async fn capabilities(&self) -> Result<&Value> {
        self.capabilities
            .get_or_try_init(|| async {
                self.transport
                    .get(&format!("{ENDPOINT_BASE}/license/capabilities"))
                    .await
            })
            .await
    }

    /// The current license status.
    pub async fn status(&self) -> Result<&LicenseStatus> {
        self.status
            .get_or_try_init(|| async {
                self.transport
                    .get(&format!("{ENDPOINT_BASE}/license/status"))
                    .await
            })
            .await
    }

    /// The machine key identifying this server installation.
    pub async fn machine_key(&self) -> Result<&MachineKey> {
        self.machine_key
            .get_or_try_init(|| async {
                self.transport
                    .get(&format!("{ENDPOINT_BASE}/machinekey"))
                    .await
            })
            .await
    }

    /// The system code, unwrapped from its `systemCode` envelope.
    ///
    /// A response without that key is a decode error.
    pub async fn system_code(&self) -> Result<&str> {
        let code = self
            .system_code
            .get_or_try_init(|| async {
                let envelope: SystemCodeEnvelope = self
                    .transport
                    .get(&format!("{ENDPOINT_BASE}/systemcode"))
                    .await?;
                Ok::<_, Error>(envelope.system_code)
            })
            .await?;
        Ok(code.as_str())
    }
}
