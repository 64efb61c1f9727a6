//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags, RemoteFlags};
use crate::commands;
use crate::domain::config::{DEFAULT_API_URL, DEFAULT_CONSOLE_URL};

/// Spin up egress-secured cloud VMs for AI agents
#[derive(Parser)]
#[command(
    name = "irons",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// API endpoint URL
    #[arg(long, global = true, env = "IRONS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key for authentication (falls back to the stored key)
    #[arg(long, global = true, env = "IRONS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Console URL used by `irons login`
    #[arg(
        long,
        global = true,
        env = "IRONS_CONSOLE_URL",
        default_value = DEFAULT_CONSOLE_URL,
        hide = true
    )]
    pub console_url: String,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new sandbox and wait until it is ready
    Create(commands::create::CreateArgs),

    /// Start a stopped sandbox
    Start(commands::WaitArgs),

    /// Stop a running sandbox
    Stop(commands::WaitArgs),

    /// Destroy a sandbox
    Destroy(commands::NameArg),

    /// Show the status of a sandbox
    Status(commands::NameArg),

    /// List all sandboxes
    List,

    /// Manage account-wide egress rules
    #[command(subcommand)]
    Egress(commands::egress::EgressCommand),

    /// Open an SSH session to a sandbox
    Ssh(commands::ssh::SshArgs),

    /// Copy files to or from a sandbox
    Scp(commands::scp::ScpArgs),

    /// Forward a local port to a port on a sandbox
    Forward(commands::forward::ForwardArgs),

    /// Authenticate with a device code
    Login,

    /// Inspect audit logs
    #[command(subcommand)]
    Audit(commands::audit::AuditCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self, cancel: CancellationToken) -> Result<ExitCode> {
        let Cli {
            api_url,
            api_key,
            console_url,
            quiet,
            no_color,
            yes,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(
            AppFlags {
                output: OutputFlags { no_color, quiet },
                behaviour: BehaviourFlags { yes },
                remote: RemoteFlags {
                    api_url,
                    api_key,
                    console_url,
                },
            },
            cancel,
        );

        match command {
            Command::Create(args) => commands::create::run(&app, &args).await,
            Command::Start(args) => commands::start::run(&app, &args).await,
            Command::Stop(args) => commands::stop::run(&app, &args).await,
            Command::Destroy(args) => commands::destroy::run(&app, &args).await,
            Command::Status(args) => commands::status::run(&app, &args).await,
            Command::List => commands::list::run(&app).await,
            Command::Egress(cmd) => commands::egress::run(&app, cmd).await,
            Command::Ssh(args) => commands::ssh::run(&app, &args).await,
            Command::Scp(args) => commands::scp::run(&app, &args).await,
            Command::Forward(args) => commands::forward::run(&app, &args).await,
            Command::Login => commands::login::run(&app).await,
            Command::Audit(cmd) => commands::audit::run(&app, cmd).await,
        }
    }
}
