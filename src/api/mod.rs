//
//  fmeflow-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Manager Layer
//!
//! This module groups the typed managers for FME Flow's REST API v3, one
//! per resource family.
//!
//! ## Architecture
//!
//! Each manager owns nothing but a shared transport handle and exposes the
//! operations of its endpoint family:
//!
//! - [`repositories`]: Repository listing, lookup and per-repository items
//! - [`workspaces`]: Workspace aggregation across repositories
//! - [`automations`]: Automation workflows, tags, logs and status
//! - [`projects`]: Project listing, lookup and creation
//! - [`licensing`]: License capabilities, status, machine key, system code
//! - [`users`]: User accounts and their owned resources
//!
//! Managers are cheap, stateless views (licensing being the one deliberate
//! exception: it memoizes, since license state changes rarely). All of
//! them are constructed for you by
//! [`FmeFlowClient`](crate::FmeFlowClient); there is no reason to build
//! one by hand.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fmeflow_client::FmeFlowClient;
//!
//! # async fn demo() -> fmeflow_client::Result<()> {
//! let client = FmeFlowClient::new("https://flow.example.com", "my-token")?;
//!
//! for repository in client.repositories().all().await? {
//!     println!("{}", repository.name);
//! }
//! # Ok(())
//! # }
//! ```

/// Automation workflow operations.
pub mod automations;

/// License capabilities, status and machine identification.
pub mod licensing;

/// Project listing, lookup and creation.
pub mod projects;

/// Repository operations and per-repository item listing.
pub mod repositories;

/// User accounts, with navigation to each account's owned resources.
pub mod users;

/// Workspace aggregation across all repositories.
pub mod workspaces;

/// Shared wire envelopes and field tolerance helpers.
pub(crate) mod common;

pub use automations::{Automation, AutomationManager, AutomationStatus};
pub use licensing::{LicenseStatus, LicensingManager, MachineKey};
pub use projects::{CreateProjectRequest, Project, ProjectManager};
pub use repositories::{Repository, RepositoryManager};
pub use users::{User, UserManager};
pub use workspaces::{WorkspaceItem, WorkspaceManager};
