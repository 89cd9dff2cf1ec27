//
//  fmeflow-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # FME Flow Client Library
//!
//! A typed async client for the FME Flow (formerly FME Server) REST API v3.
//!
//! ## Overview
//!
//! This library wraps an FME Flow server behind one client object. You
//! give it a base URL and an API token; it gives you typed access to the
//! server's repositories, workspaces, automation workflows, projects,
//! licensing state and user accounts, without hand-rolling URLs, headers
//! or envelope unwrapping.
//!
//! ## Features
//!
//! - **Token Authentication**: every request carries the server's
//!   `fmetoken` authorization scheme
//! - **Typed Records**: responses decode into structs with named fields,
//!   unknown server fields preserved in an `extra` bag
//! - **Resource Managers**: one manager per endpoint family, reachable
//!   from the client facade
//! - **Relationship Navigation**: a fetched [`User`] can list its own
//!   workspaces, projects and automations
//! - **Lenient TLS Option**: opt-out certificate verification for
//!   servers behind internal CAs
//!
//! ## Module Structure
//!
//! - [`client`]: The [`FmeFlowClient`] facade and builder
//! - [`api`]: Resource managers and their record types
//! - [`error`]: The crate-wide [`Error`] type and [`Result`] alias
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fmeflow_client::FmeFlowClient;
//!
//! # async fn demo() -> fmeflow_client::Result<()> {
//! let client = FmeFlowClient::new("https://flow.example.com", "my-token")?;
//!
//! println!("server: {}", client.flow_version().await?);
//!
//! for workspace in client.workspaces().all().await? {
//!     println!("{}", workspace.name);
//! }
//! # Ok(())
//! # }
//! ```

/// The client facade and its builder.
///
/// [`FmeFlowClient`] owns the transport and one manager per resource
/// family; everything in this crate is reached through it.
pub mod client;

/// Resource managers for FME Flow's REST API v3.
///
/// One module per endpoint family: repositories, workspaces, automations,
/// projects, licensing and users. Each manager is handed out by the
/// client facade.
pub mod api;

/// Error and result types.
///
/// All fallible operations in this crate return [`error::Result`], with
/// HTTP failures, network faults, decode errors and configuration
/// mistakes folded into one [`Error`] enum.
pub mod error;

/// Authenticated HTTP plumbing shared by every manager.
///
/// Internal: resolves paths against the API root, attaches headers and
/// funnels responses through one decode/error path.
mod transport;

/// Re-export of the client facade.
///
/// # Example
///
/// ```rust,no_run
/// use fmeflow_client::FmeFlowClient;
///
/// let client = FmeFlowClient::new("https://flow.example.com", "my-token");
/// ```
pub use client::{FmeFlowClient, FmeFlowClientBuilder, Healthcheck, ServerInfo, UNKNOWN_VERSION};

/// Re-export of the crate error type and result alias.
pub use error::{Error, Result};

/// Re-export of the record types most callers touch.
pub use api::{
    Automation, AutomationStatus, CreateProjectRequest, LicenseStatus, MachineKey, Project,
    Repository, User, WorkspaceItem,
};

/// Library version constant.
///
/// Derived from Cargo.toml at compile time and sent in the `User-Agent`
/// header of every request.
///
/// # Example
///
/// ```rust
/// use fmeflow_client::VERSION;
///
/// println!("fmeflow-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
