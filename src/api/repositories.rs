//
//  fmeflow-client
//  api/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Repository resources.
//!
//! Repositories are named containers grouping workspaces and other items on
//! the FME Flow server. This module provides the [`RepositoryManager`] for
//! listing and fetching repositories and for listing the workspace items a
//! repository contains.
//!
//! # Example
//!
//! ```rust,no_run
//! use fmeflow_client::FmeFlowClient;
//!
//! # async fn example() -> fmeflow_client::Result<()> {
//! let client = FmeFlowClient::new("https://fme.example.com", "my-token")?;
//!
//! for repo in client.repositories().all().await? {
//!     let workspaces = client.repositories().workspaces(&repo.name).await?;
//!     println!("{}: {} workspaces", repo.name, workspaces.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{null_to_empty, Items};
use crate::api::workspaces::WorkspaceItem;
use crate::error::Result;
use crate::transport::Transport;

/// Endpoint prefix for the repository resource family.
const ENDPOINT_BASE: &str = "/repositories";

/// A repository record as returned by the server.
///
/// Unknown fields are tolerated and preserved in [`extra`](Self::extra);
/// known-but-absent fields fall back to their defaults rather than failing
/// deserialization, so a malformed entry in a listing does not poison the
/// whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Repository name. Empty when the server returned a malformed entry
    /// without one (missing key or explicit null); workspace aggregation
    /// skips such entries.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,

    /// Optional human-readable description.
    #[serde(default)]
    pub description: Option<String>,

    /// Account that owns the repository.
    #[serde(default)]
    pub owner: Option<String>,

    /// Whether the repository is shared with other accounts.
    #[serde(default)]
    pub sharable: bool,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Manager for the `/repositories` resource family.
///
/// Obtained from [`FmeFlowClient::repositories`](crate::FmeFlowClient::repositories).
/// Stateless: every call is a fresh round trip to the server.
#[derive(Debug)]
pub struct RepositoryManager {
    transport: Arc<Transport>,
}

impl RepositoryManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all repositories, in server-listing order.
    pub async fn all(&self) -> Result<Vec<Repository>> {
        let envelope: Items<Repository> = self.transport.get(ENDPOINT_BASE).await?;
        Ok(envelope.items)
    }

    /// Fetches one repository by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::Error::Http) with status 404 when the
    /// repository does not exist; [`Error::is_not_found`](crate::Error::is_not_found)
    /// recognizes that case.
    pub async fn get(&self, name: &str) -> Result<Repository> {
        self.transport.get(&format!("{ENDPOINT_BASE}/{name}")).await
    }

    /// Lists the workspace items stored in one repository.
    ///
    /// Issues `GET /repositories/{name}/items?type=WORKSPACE`, so only
    /// workspaces come back; other item types (custom formats, templates)
    /// are filtered server-side.
    pub async fn workspaces(&self, name: &str) -> Result<Vec<WorkspaceItem>> {
        let envelope: Items<WorkspaceItem> = self
            .transport
            .get_with_query(
                &format!("{ENDPOINT_BASE}/{name}/items"),
                &[("type", "WORKSPACE")],
            )
            .await?;
        Ok(envelope.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_tolerates_minimal_record() {
        let repo: Repository = serde_json::from_str(r#"{"name":"Samples"}"#).unwrap();
        assert_eq!(repo.name, "Samples");
        assert_eq!(repo.description, None);
        assert!(!repo.sharable);
        assert!(repo.extra.is_empty());
    }

    #[test]
    fn test_repository_missing_name_defaults_to_empty() {
        let repo: Repository = serde_json::from_str(r#"{"description":"orphan"}"#).unwrap();
        assert_eq!(repo.name, "");
    }

    #[test]
    fn test_repository_null_name_defaults_to_empty() {
        let repo: Repository = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(repo.name, "");
    }

    #[test]
    fn test_repository_keeps_unknown_fields() {
        let json = r#"{"name":"Samples","fileCount":12,"totalFileSize":4096}"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.extra["fileCount"], 12);
        assert_eq!(repo.extra["totalFileSize"], 4096);
    }
}
