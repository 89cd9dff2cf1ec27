//
//  fmeflow-client
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project resources.
//!
//! Projects bundle workspaces and related items for packaging and
//! migration. The collection lives at the doubled path
//! `/projects/projects`; the repetition is the server's, not ours.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{null_to_empty, Items};
use crate::error::Result;
use crate::transport::Transport;

/// Endpoint prefix for the projects resource family.
const ENDPOINT_BASE: &str = "/projects/projects";

/// A project record.
///
/// Unknown fields are preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned project identifier (a UUID).
    #[serde(default, deserialize_with = "null_to_empty")]
    pub id: String,

    /// Project name.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,

    /// Optional project description.
    #[serde(default)]
    pub description: Option<String>,

    /// Display name of the owning account.
    #[serde(default)]
    pub owner: Option<String>,

    /// Account that owns the project; the owner key used by
    /// [`ProjectManager::for_user`].
    #[serde(default)]
    pub user_name: Option<String>,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for [`ProjectManager::create`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Name for the new project.
    pub name: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional owning account; the server defaults to the token's account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl CreateProjectRequest {
    /// Builds a request with just a name and no optional fields.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            owner: None,
        }
    }
}

/// Manager for the `/projects/projects` resource family.
///
/// Obtained from [`FmeFlowClient::projects`](crate::FmeFlowClient::projects).
/// Stateless: every call is a fresh round trip to the server.
#[derive(Debug)]
pub struct ProjectManager {
    transport: Arc<Transport>,
}

impl ProjectManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all projects, in server-listing order.
    pub async fn all(&self) -> Result<Vec<Project>> {
        let envelope: Items<Project> = self.transport.get(ENDPOINT_BASE).await?;
        Ok(envelope.items)
    }

    /// Fetches one project by identifier.
    pub async fn get(&self, project_id: &str) -> Result<Project> {
        self.transport
            .get(&format!("{ENDPOINT_BASE}/{project_id}"))
            .await
    }

    /// Creates a new project and returns the server's record of it.
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project> {
        self.transport.post(ENDPOINT_BASE, request).await
    }

    /// Lists the projects owned by `username`.
    ///
    /// Client-side filter over [`all`](Self::all) on the `userName` field;
    /// relative order is preserved.
    pub async fn for_user(&self, username: &str) -> Result<Vec<Project>> {
        let mut projects = self.all().await?;
        projects.retain(|p| p.user_name.as_deref() == Some(username));
        Ok(projects)
    }
}
