//
//  fmeflow-client
//  api/automations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Automation workflow resources.
//!
//! Automations are server-defined workflow/trigger definitions, distinct
//! from workspaces. This module wraps the `/automations/workflows` endpoint
//! family: listing, tags, detail lookup, and the per-workflow log and
//! status documents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{null_to_empty, Items};
use crate::error::Result;
use crate::transport::Transport;

/// Endpoint prefix for the automations resource family.
const ENDPOINT_BASE: &str = "/automations/workflows";

/// An automation workflow record.
///
/// Unknown fields are preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    /// Server-assigned workflow identifier (a UUID).
    #[serde(default, deserialize_with = "null_to_empty")]
    pub id: String,

    /// Workflow name.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,

    /// Account that owns the workflow; the owner key used by
    /// [`AutomationManager::for_user`].
    #[serde(default)]
    pub user_name: Option<String>,

    /// Whether the workflow is currently enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Optional workflow description.
    #[serde(default)]
    pub description: Option<String>,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Runtime status document for one automation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationStatus {
    /// Status string as the server reports it.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub status: String,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Manager for the `/automations/workflows` resource family.
///
/// Obtained from [`FmeFlowClient::automations`](crate::FmeFlowClient::automations).
/// Stateless: every call is a fresh round trip to the server.
#[derive(Debug)]
pub struct AutomationManager {
    transport: Arc<Transport>,
}

impl AutomationManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all automation workflows, in server-listing order.
    pub async fn all(&self) -> Result<Vec<Automation>> {
        let envelope: Items<Automation> = self.transport.get(ENDPOINT_BASE).await?;
        Ok(envelope.items)
    }

    /// Lists the tags defined across all workflows.
    ///
    /// The server returns a bare string array here, not an `items`
    /// envelope.
    pub async fn tags(&self) -> Result<Vec<String>> {
        self.transport.get(&format!("{ENDPOINT_BASE}/tags")).await
    }

    /// Fetches one workflow by identifier.
    pub async fn get(&self, workflow_id: &str) -> Result<Automation> {
        self.transport
            .get(&format!("{ENDPOINT_BASE}/{workflow_id}"))
            .await
    }

    /// Fetches the log document for one workflow.
    ///
    /// The log shape varies between server versions, so it is returned as a
    /// raw JSON value rather than a typed record.
    pub async fn log(&self, workflow_id: &str) -> Result<Value> {
        self.transport
            .get(&format!("{ENDPOINT_BASE}/{workflow_id}/log"))
            .await
    }

    /// Fetches the current status of one workflow.
    pub async fn status(&self, workflow_id: &str) -> Result<AutomationStatus> {
        self.transport
            .get(&format!("{ENDPOINT_BASE}/{workflow_id}/status"))
            .await
    }

    /// Lists the workflows owned by `username`.
    ///
    /// Client-side filter over [`all`](Self::all) on the `userName` field;
    /// relative order is preserved.
    pub async fn for_user(&self, username: &str) -> Result<Vec<Automation>> {
        let mut automations = self.all().await?;
        automations.retain(|a| a.user_name.as_deref() == Some(username));
        Ok(automations)
    }
}
