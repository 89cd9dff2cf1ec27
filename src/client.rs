//
//  fmeflow-client
//  client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # FME Flow Client Facade
//!
//! The [`FmeFlowClient`] is the entry point of this crate. It owns one
//! authenticated transport and a manager per resource family, all built
//! eagerly at construction time so a constructed client is fully usable
//! with no hidden first-call work.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fmeflow_client::FmeFlowClient;
//!
//! # async fn demo() -> fmeflow_client::Result<()> {
//! let client = FmeFlowClient::builder("https://flow.example.com", "my-token")
//!     .verify_tls(false)
//!     .build()?;
//!
//! println!("server build: {}", client.flow_version().await?);
//! for user in client.users().all().await? {
//!     println!("{} ({})", user, user.account_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Notes
//!
//! Server metadata from [`info`](FmeFlowClient::info) is fetched once and
//! cached for the client's lifetime; [`healthcheck`](FmeFlowClient::healthcheck)
//! is never cached, every call probes the server again.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::api::common::null_to_empty;
use crate::api::{
    AutomationManager, LicensingManager, ProjectManager, RepositoryManager, UserManager,
    WorkspaceManager,
};
use crate::error::Result;
use crate::transport::Transport;

/// Version string reported when the server's info document has no `build`
/// key.
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Healthcheck {
    /// Health state as the server reports it, e.g. `ok`. Empty when the
    /// server omits the field or sends `null`.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub status: String,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Server metadata document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    /// Full build string, e.g. `FME Flow 2024.1 - Build 24619 - linux-x64`.
    #[serde(default)]
    pub build: Option<String>,

    /// Release version, when reported separately from the build string.
    #[serde(default)]
    pub version: Option<String>,

    /// Server time zone identifier.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Server wall-clock time at response
    /// time.
    #[serde(default)]
    pub current_time: Option<String>,

    /// Any server fields this crate does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Builder for [`FmeFlowClient`].
///
/// TLS verification is on unless [`verify_tls`](Self::verify_tls) turns it
/// off; everything else is validated in [`build`](Self::build).
///
/// The `Debug` output redacts the token, so a logged builder never leaks
/// the credential.
#[derive(Clone)]
pub struct FmeFlowClientBuilder {
    base_url: String,
    token: String,
    verify_tls: bool,
}

impl FmeFlowClientBuilder {
    fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            verify_tls: true,
        }
    }

    /// Controls TLS certificate verification.
    ///
    /// Passing `false` accepts invalid and self-signed certificates, which
    /// FME Flow installations behind internal CAs commonly present. Leave
    /// it on for anything reachable from outside your network.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// Fails with [`Error::Config`](crate::Error::Config) when the base
    /// URL does not parse as an absolute `http`/`https` URL or the token
    /// is empty.
    pub fn build(self) -> Result<FmeFlowClient> {
        let transport = Arc::new(Transport::new(&self.base_url, &self.token, self.verify_tls)?);
        Ok(FmeFlowClient {
            repositories: RepositoryManager::new(transport.clone()),
            workspaces: WorkspaceManager::new(transport.clone()),
            automations: AutomationManager::new(transport.clone()),
            projects: ProjectManager::new(transport.clone()),
            licensing: LicensingManager::new(transport.clone()),
            users: UserManager::new(transport.clone()),
            info: OnceCell::new(),
            transport,
        })
    }
}

impl fmt::Debug for FmeFlowClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmeFlowClientBuilder")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

/// Typed client for one FME Flow server.
///
/// Construction performs no I/O. The first request is made by whichever
/// manager operation you call first.
#[derive(Debug)]
pub struct FmeFlowClient {
    transport: Arc<Transport>,
    repositories: RepositoryManager,
    workspaces: WorkspaceManager,
    automations: AutomationManager,
    projects: ProjectManager,
    licensing: LicensingManager,
    users: UserManager,
    info: OnceCell<ServerInfo>,
}

impl FmeFlowClient {
    /// Builds a client with default settings (TLS verification on).
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::builder(base_url, token).build()
    }

    /// Starts a builder for non-default settings.
    pub fn builder(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> FmeFlowClientBuilder {
        FmeFlowClientBuilder::new(base_url, token)
    }

    /// The normalized server base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// The derived REST API root, `<base_url>/fmerest/v3`.
    pub fn api_root(&self) -> &str {
        self.transport.api_root()
    }

    /// Repository operations.
    pub fn repositories(&self) -> &RepositoryManager {
        &self.repositories
    }

    /// Workspace operations.
    pub fn workspaces(&self) -> &WorkspaceManager {
        &self.workspaces
    }

    /// Automation workflow operations.
    pub fn automations(&self) -> &AutomationManager {
        &self.automations
    }

    /// Project operations.
    pub fn projects(&self) -> &ProjectManager {
        &self.projects
    }

    /// Licensing operations.
    pub fn licensing(&self) -> &LicensingManager {
        &self.licensing
    }

    /// User account operations.
    pub fn users(&self) -> &UserManager {
        &self.users
    }

    /// Probes server liveness. Never cached.
    pub async fn healthcheck(&self) -> Result<Healthcheck> {
        self.transport.get("/healthcheck").await
    }

    /// The server's metadata document, fetched once and cached for the
    /// client's lifetime. A failed fetch is not cached, the next call
    /// retries.
    pub async fn info(&self) -> Result<&ServerInfo> {
        self.info
            .get_or_try_init(|| async { self.transport.get("/info").await })
            .await
    }

    /// The server build string from [`info`](Self::info), or
    /// [`UNKNOWN_VERSION`] when the server does not report one.
    pub async fn flow_version(&self) -> Result<&str> {
        let info = self.info().await?;
        Ok(info.build.as_deref().unwrap_or(UNKNOWN_VERSION))
    }
}
