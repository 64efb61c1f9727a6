//! SSH, SCP, and port-forward argument construction.
//!
//! Pure functions: the infra layer runs the resulting argument lists.

use anyhow::Result;
use irons_common::SshInfo;

const INSECURE_HOST_KEY_OPTIONS: [&str; 6] = [
    "-o",
    "StrictHostKeyChecking=no",
    "-o",
    "UserKnownHostsFile=/dev/null",
    "-o",
    "LogLevel=ERROR",
];

fn push_host_key_options(args: &mut Vec<String>, strict_host_keys: bool) {
    if !strict_host_keys {
        args.extend(INSECURE_HOST_KEY_OPTIONS.iter().map(ToString::to_string));
    }
}

fn destination(info: &SshInfo) -> String {
    format!("{}@{}", info.username, info.host)
}

/// Arguments for an interactive `ssh` session.
#[must_use]
pub fn ssh_args(info: &SshInfo, strict_host_keys: bool) -> Vec<String> {
    let mut args = vec!["-p".to_string(), info.port.to_string()];
    push_host_key_options(&mut args, strict_host_keys);
    args.push(destination(info));
    if let Some(command) = info.command.as_deref().filter(|c| !c.is_empty()) {
        args.push(command.to_string());
    }
    args
}

/// Arguments for `ssh -N -L local:localhost:remote`.
#[must_use]
pub fn forward_args(
    info: &SshInfo,
    local_port: u16,
    remote_port: u16,
    strict_host_keys: bool,
) -> Vec<String> {
    let mut args = vec![
        "-p".to_string(),
        info.port.to_string(),
        "-L".to_string(),
        format!("{local_port}:localhost:{remote_port}"),
        "-N".to_string(),
    ];
    push_host_key_options(&mut args, strict_host_keys);
    args.push(destination(info));
    args
}

/// One side of an `scp` copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEndpoint {
    Local(String),
    Remote { sandbox: String, path: String },
}

impl CopyEndpoint {
    /// Parse `sandbox:path`; anything else is local.
    ///
    /// A single character before the colon is a Windows drive letter, not a
    /// sandbox name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.find(':') {
            Some(idx) if idx > 1 => Self::Remote {
                sandbox: raw[..idx].to_string(),
                path: raw[idx + 1..].to_string(),
            },
            _ => Self::Local(raw.to_string()),
        }
    }

    fn render(&self, info: &SshInfo) -> String {
        match self {
            Self::Local(path) => path.clone(),
            Self::Remote { path, .. } => format!("{}:{path}", destination(info)),
        }
    }
}

/// A validated copy: exactly one side is a sandbox path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub sandbox: String,
    pub src: CopyEndpoint,
    pub dst: CopyEndpoint,
}

impl CopyPlan {
    /// # Errors
    ///
    /// Returns an error if both or neither side names a sandbox.
    pub fn new(src: &str, dst: &str) -> Result<Self> {
        let src = CopyEndpoint::parse(src);
        let dst = CopyEndpoint::parse(dst);
        let sandbox = match (&src, &dst) {
            (CopyEndpoint::Remote { .. }, CopyEndpoint::Remote { .. }) => {
                anyhow::bail!("only one of SRC or DST may be a sandbox path (sandbox:path)")
            }
            (CopyEndpoint::Remote { sandbox, .. }, CopyEndpoint::Local(_))
            | (CopyEndpoint::Local(_), CopyEndpoint::Remote { sandbox, .. }) => sandbox.clone(),
            (CopyEndpoint::Local(_), CopyEndpoint::Local(_)) => {
                anyhow::bail!("one of SRC or DST must be a sandbox path (sandbox:path)")
            }
        };
        Ok(Self { sandbox, src, dst })
    }

    /// Arguments for `scp`, with the sandbox side rewritten to `user@host:path`.
    #[must_use]
    pub fn scp_args(&self, info: &SshInfo, recursive: bool, strict_host_keys: bool) -> Vec<String> {
        let mut args = vec!["-P".to_string(), info.port.to_string()];
        if recursive {
            args.push("-r".to_string());
        }
        push_host_key_options(&mut args, strict_host_keys);
        args.push(self.src.render(info));
        args.push(self.dst.render(info));
        args
    }
}

/// Render a command line for `--command` output.
#[must_use]
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
