//! `irons egress`: account-wide outbound network rules.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::EgressPolicy;
use crate::output::HumanRenderer;

#[derive(Subcommand)]
pub enum EgressCommand {
    /// Allow outbound traffic to a domain
    Allow {
        /// Domain to allow (e.g. crates.io)
        domain: String,
    },
    /// Deny outbound traffic to a domain
    Deny {
        /// Domain to deny
        domain: String,
    },
    /// List allowed and denied domains
    List,
    /// Show the egress mode, or set it when MODE is given
    Mode {
        /// New mode, e.g. `enforce` or `warn`
        mode: Option<String>,
    },
}

/// Run `irons egress <subcommand>`.
///
/// # Errors
///
/// Returns an error if the API call fails.
pub async fn run(app: &AppContext, cmd: EgressCommand) -> Result<ExitCode> {
    let api = app.api()?;
    let ctx = &app.output;
    match cmd {
        EgressCommand::Allow { domain } => {
            api.allow_domain(&domain).await.context("allowing egress")?;
            ctx.success(&format!("Egress allowed: {domain}"));
        }
        EgressCommand::Deny { domain } => {
            api.deny_domain(&domain).await.context("denying egress")?;
            ctx.success(&format!("Egress denied: {domain}"));
        }
        EgressCommand::List => {
            let rules = api.egress_rules().await.context("listing egress rules")?;
            HumanRenderer::new(ctx).render_egress_rules(&rules);
        }
        EgressCommand::Mode { mode: None } => {
            let mode = api.egress_mode().await.context("getting egress mode")?;
            if ctx.quiet {
                println!("{mode}");
            } else {
                ctx.kv("Egress mode:", &mode);
            }
        }
        EgressCommand::Mode { mode: Some(mode) } => {
            api.set_egress_mode(&mode)
                .await
                .context("setting egress mode")?;
            ctx.success(&format!("Egress mode set to {mode}"));
        }
    }
    Ok(ExitCode::SUCCESS)
}
