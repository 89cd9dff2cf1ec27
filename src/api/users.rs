//
//  fmeflow-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User account resources.
//!
//! # Overview
//!
//! Accounts come from the `/security/accounts` endpoint family. A [`User`]
//! is more than a plain record: it keeps a handle to the transport it was
//! fetched through, so the workspaces, projects and automations belonging
//! to the account are one call away.
//!
//! # Notes
//!
//! The server tags every account with a synthetic role named
//! `user:<account>`. Those tags are bookkeeping, not grants, and are
//! dropped when the record is bound; [`User::roles`](User) only ever
//! carries real roles.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::automations::{Automation, AutomationManager};
use crate::api::common::{null_to_empty, Items};
use crate::api::projects::{Project, ProjectManager};
use crate::api::workspaces::{WorkspaceItem, WorkspaceManager};
use crate::error::Result;
use crate::transport::Transport;

/// Endpoint prefix for the user account resource family.
const ENDPOINT_BASE: &str = "/security/accounts";

/// Wire-side account record, before binding to a transport.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    name: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    sharing_enabled: bool,
    #[serde(default)]
    is_password_expired: bool,
    #[serde(default)]
    is_password_change_needed: bool,
    #[serde(default, rename = "type", deserialize_with = "null_to_empty")]
    account_type: String,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A user account, bound to the client it was fetched through.
///
/// `name` is the only field the server must send; everything else falls
/// back to an empty or `None` value. Unknown fields are preserved in
/// [`extra`](Self::extra).
#[derive(Debug, Clone)]
pub struct User {
    /// Account name, unique per server.
    pub name: String,

    /// Human-readable display name.
    pub full_name: Option<String>,

    /// Contact email address.
    pub email: Option<String>,

    /// Whether the account can log in.
    pub enabled: bool,

    /// Whether the account may share items with others.
    pub sharing_enabled: bool,

    /// Whether the account's password has expired.
    pub is_password_expired: bool,

    /// Whether the server will force a password change at next login.
    pub is_password_change_needed: bool,

    /// Account type, e.g. `USER` or `SYSTEM` (the server's `type` field).
    pub account_type: String,

    /// Role names granted to the account, with the server's synthetic
    /// `user:` tags already dropped.
    pub roles: Vec<String>,

    /// Any server fields this crate does not model explicitly.
    pub extra: Map<String, Value>,

    transport: Arc<Transport>,
}

/// Drops the server's synthetic `user:`-tagged entries from a role list.
///
/// Running it twice changes nothing; a list without tags passes through
/// untouched.
fn scrub_roles(mut roles: Vec<String>) -> Vec<String> {
    roles.retain(|role| !role.starts_with("user:"));
    roles
}

impl User {
    fn bind(record: UserRecord, transport: Arc<Transport>) -> Self {
        Self {
            name: record.name,
            full_name: record.full_name,
            email: record.email,
            enabled: record.enabled,
            sharing_enabled: record.sharing_enabled,
            is_password_expired: record.is_password_expired,
            is_password_change_needed: record.is_password_change_needed,
            account_type: record.account_type,
            roles: scrub_roles(record.roles),
            extra: record.extra,
            transport,
        }
    }

    /// Lists the workspaces owned by this account.
    pub async fn workspaces(&self) -> Result<Vec<WorkspaceItem>> {
        WorkspaceManager::new(self.transport.clone())
            .for_user(&self.name)
            .await
    }

    /// Lists the projects owned by this account.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        ProjectManager::new(self.transport.clone())
            .for_user(&self.name)
            .await
    }

    /// Lists the automation workflows owned by this account.
    pub async fn automations(&self) -> Result<Vec<Automation>> {
        AutomationManager::new(self.transport.clone())
            .for_user(&self.name)
            .await
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Manager for the `/security/accounts` resource family.
///
/// Obtained from [`FmeFlowClient::users`](crate::FmeFlowClient::users).
#[derive(Debug)]
pub struct UserManager {
    transport: Arc<Transport>,
}

impl UserManager {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all user accounts, in server-listing order.
    pub async fn all(&self) -> Result<Vec<User>> {
        let envelope: Items<UserRecord> = self.transport.get(ENDPOINT_BASE).await?;
        Ok(envelope
            .items
            .into_iter()
            .map(|record| User::bind(record, self.transport.clone()))
            .collect())
    }

    /// Fetches one account by name.
    pub async fn get(&self, name: &str) -> Result<User> {
        let record: UserRecord = self
            .transport
            .get(&format!("{ENDPOINT_BASE}/{name}"))
            .await?;
        Ok(User::bind(record, self.transport.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Arc<Transport> {
        Arc::new(Transport::new("https://flow.example.com", "t0k3n", true).unwrap())
    }

    fn user_from(json: &str) -> User {
        let record: UserRecord = serde_json::from_str(json).unwrap();
        User::bind(record, transport())
    }

    #[test]
    fn test_scrub_roles_drops_tagged_entries() {
        let roles = vec![
            "fmeadmin".to_string(),
            "user:alice".to_string(),
            "fmeauthor".to_string(),
        ];
        assert_eq!(scrub_roles(roles), vec!["fmeadmin", "fmeauthor"]);
    }

    #[test]
    fn test_scrub_roles_is_idempotent() {
        let once = scrub_roles(vec!["user:bob".to_string(), "fmeuser".to_string()]);
        let twice = scrub_roles(once.clone());
        assert_eq!(once, twice);
        assert_eq!(twice, vec!["fmeuser"]);
    }

    #[test]
    fn test_scrub_roles_leaves_untagged_lists_untouched() {
        let roles = vec!["fmeadmin".to_string(), "fmeauthor".to_string()];
        assert_eq!(scrub_roles(roles.clone()), roles);
    }

    #[test]
    fn test_user_binds_record_and_scrubs_roles() {
        let user = user_from(
            r#"{
                "name": "alice",
                "fullName": "Alice Admin",
                "type": "USER",
                "enabled": true,
                "roles": ["fmeadmin", "user:alice"]
            }"#,
        );
        assert_eq!(user.name, "alice");
        assert_eq!(user.full_name.as_deref(), Some("Alice Admin"));
        assert_eq!(user.account_type, "USER");
        assert!(user.enabled);
        assert_eq!(user.roles, vec!["fmeadmin"]);
    }

    #[test]
    fn test_user_requires_name() {
        let missing: std::result::Result<UserRecord, _> =
            serde_json::from_str(r#"{"fullName":"No Name"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user = user_from(r#"{"name":"bob","securityLevel":3}"#);
        assert_eq!(user.extra["securityLevel"], 3);
    }

    #[test]
    fn test_user_null_type_defaults_to_empty() {
        let user = user_from(r#"{"name":"dave","type":null}"#);
        assert_eq!(user.account_type, "");
    }

    #[test]
    fn test_user_displays_as_name() {
        let user = user_from(r#"{"name":"carol"}"#);
        assert_eq!(user.to_string(), "carol");
    }
}
