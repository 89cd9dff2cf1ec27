//
//  fmeflow-client
//  bin/user_report.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Per-user resource report for an FME Flow server.
//!
//! Fetches every workspace, automation and project once, then prints one
//! table row per account with its ownership counts.

use anyhow::Result;
use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fmeflow_client::FmeFlowClient;

#[derive(Debug, Parser)]
#[command(name = "fme-user-report", version, about = "Summarize per-user resource ownership on an FME Flow server")]
struct Args {
    /// Base URL of the FME Flow server, e.g. https://flow.example.com
    #[arg(long, env = "FMEFLOW_BASE_URL")]
    base_url: String,

    /// API token for the server
    #[arg(long, env = "FMEFLOW_TOKEN", hide_env_values = true)]
    token: String,

    /// Verify the server's TLS certificate (accepts true/false, yes/no, 1/0)
    #[arg(
        long,
        env = "FMEFLOW_VERIFY_SSL",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    verify_ssl: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let args = Args::parse();

    // Build the report
    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("FMEFLOW_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let client = FmeFlowClient::builder(&args.base_url, &args.token)
        .verify_tls(args.verify_ssl)
        .build()?;

    println!("FME Flow {} at {}", client.flow_version().await?, client.base_url());

    // One fetch per resource family; counting happens locally.
    let workspaces = client.workspaces().all().await?;
    let automations = client.automations().all().await?;
    let projects = client.projects().all().await?;
    let users = client.users().all().await?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "User",
            "Type",
            "Enabled",
            "Workspaces",
            "Automations",
            "Projects",
        ]);

    for user in &users {
        let name = user.name.as_str();
        let owned_workspaces = workspaces
            .iter()
            .filter(|w| w.user_name.as_deref() == Some(name))
            .count();
        let owned_automations = automations
            .iter()
            .filter(|a| a.user_name.as_deref() == Some(name))
            .count();
        let owned_projects = projects
            .iter()
            .filter(|p| p.user_name.as_deref() == Some(name))
            .count();

        table.add_row(vec![
            name.to_string(),
            user.account_type.clone(),
            if user.enabled { "yes" } else { "no" }.to_string(),
            owned_workspaces.to_string(),
            owned_automations.to_string(),
            owned_projects.to_string(),
        ]);
    }

    println!("{table}");
    println!(
        "{} users, {} workspaces, {} automations, {} projects",
        users.len(),
        workspaces.len(),
        automations.len(),
        projects.len()
    );

    Ok(())
}
