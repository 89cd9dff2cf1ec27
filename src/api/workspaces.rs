//
//  fmeflow-client
//  api/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace resources.
//!
//! Workspaces are the server's runnable transformation definitions. The REST
//! API has no single endpoint listing every workspace on the server, so
//! [`WorkspaceManager::all`] aggregates: it lists the repositories, then
//! fetches each repository's workspace items, and concatenates the results
//! in repository-listing order.
//!
//! # Malformed repository entries
//!
//! A repository record with a missing, null, or empty name cannot be
//! addressed by the items endpoint. Aggregation skips such entries
//! silently, leaving a debug trace; a malformed entry is not a failure.
//!
//! # Cost
//!
//! Aggregation issues one round trip for the repository listing plus one per
//! named repository, sequentially. [`WorkspaceManager::for_user`] filters
//! client-side on top of that, so its cost is proportional to the total
//! workspace count on every call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::null_to_empty;
use crate::api::repositories::RepositoryManager;
use crate::error::Result;
use crate::transport::Transport;

/// A workspace item as returned by a repository's item listing.
///
/// Unknown fields are preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceItem {
    /// Workspace file name, e.g. `austinApartments.fmw`. Empty when the
    /// server sends no usable name.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,

    /// Human-readable title shown in the FME Flow web UI.
    #[serde(default)]
    pub title: Option<String>,

    /// Item type reported by the server, `WORKSPACE` for entries from
    /// [`RepositoryManager::workspaces`].
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,

    /// Name of the repository the workspace lives in.
    #[serde(default)]
    pub repository_name: Option<String>,

    /// Account that published the workspace; the owner key used by
    /// [`WorkspaceManager::for_user`].
    #[serde(default)]
    pub user_name: Option<String>,

    /// Timestamp of the last save, as the server formats it.
    #[serde(default)]
    pub last_save_date: Option<String>,

    /// Optional workspace description.
    #[serde(default)]
    pub description: Option<String>,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Manager for workspaces across all repositories.
///
/// Obtained from [`FmeFlowClient::workspaces`](crate::FmeFlowClient::workspaces).
/// Listing delegates to the repository endpoints; there is no caching, and
/// repositories are always visited in server-listing order.
#[derive(Debug)]
pub struct WorkspaceManager {
    repositories: RepositoryManager,
}

impl WorkspaceManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            repositories: RepositoryManager::new(transport),
        }
    }

    /// Lists every workspace on the server.
    ///
    /// Fetches all repositories, then each named repository's workspace
    /// items, one repository at a time. Results keep repository-listing
    /// order; repositories without a name are skipped.
    pub async fn all(&self) -> Result<Vec<WorkspaceItem>> {
        let repositories = self.repositories.all().await?;

        let mut workspaces = Vec::new();
        for repository in &repositories {
            if repository.name.is_empty() {
                tracing::debug!("skipping repository entry without a name");
                continue;
            }
            workspaces.extend(self.repositories.workspaces(&repository.name).await?);
        }
        Ok(workspaces)
    }

    /// Lists the workspaces published by `username`.
    ///
    /// Client-side filter over [`all`](Self::all) on the `userName` owner
    /// field; relative order is preserved and an unknown user simply yields
    /// an empty list.
    pub async fn for_user(&self, username: &str) -> Result<Vec<WorkspaceItem>> {
        let mut workspaces = self.all().await?;
        workspaces.retain(|ws| ws.user_name.as_deref() == Some(username));
        Ok(workspaces)
    }
}
