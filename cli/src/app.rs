//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries the output context, the config store, the
//! cancellation token, and the remote endpoints so command signatures stay
//! small.

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::application::ports::ConfigStore;
use crate::domain::config::resolve_api_key;
use crate::infra::api::HttpApiClient;
use crate::infra::config::YamlConfigStore;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `IRONS_YES` env vars).
    pub yes: bool,
}

/// Where the remote services live and how to authenticate.
pub struct RemoteFlags {
    pub api_url: String,
    /// Explicit key from `--api-key` or `IRONS_API_KEY`.
    pub api_key: Option<String>,
    pub console_url: String,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
    pub remote: RemoteFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Persistent configuration file.
    pub config: YamlConfigStore,
    /// Cancelled on Ctrl-C or SIGTERM.
    pub cancel: CancellationToken,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `IRONS_YES`
    /// environment variables are present.
    pub non_interactive: bool,
    remote: RemoteFlags,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags, cancel: CancellationToken) -> Self {
        let ci_env = std::env::var_os("CI").is_some() || std::env::var_os("IRONS_YES").is_some();
        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config: YamlConfigStore::default(),
            cancel,
            non_interactive: flags.behaviour.yes || ci_env,
            remote: flags.remote,
        }
    }

    /// Authenticated client for the sandbox API.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the config file is
    /// unreadable.
    pub fn api(&self) -> Result<HttpApiClient> {
        let stored = self.config.load()?;
        let key = resolve_api_key(self.remote.api_key.as_deref(), &stored)?;
        tracing::debug!(api_url = %self.remote.api_url, "using sandbox API");
        HttpApiClient::builder(&self.remote.api_url)
            .api_key(key)
            .build()
            .context("cannot build API client")
    }

    /// Unauthenticated client for the console's device-code endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn console(&self) -> Result<HttpApiClient> {
        HttpApiClient::builder(&self.remote.console_url)
            .build()
            .context("cannot build console client")
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `IRONS_YES` env),
    /// returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
