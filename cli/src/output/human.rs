//! Human-readable terminal renderer.

use std::fmt;

use chrono::{Local, SecondsFormat, TimeZone};
use owo_colors::OwoColorize as _;

use irons_common::{AuditEvent, CreateResponse, EgressRules, SandboxStatus};

use crate::application::ports::AuditSink;
use crate::domain::{Health, classify_verdict};
use crate::output::{OutputContext, Styles};

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the server's acknowledgement of a create request.
    pub fn render_created(&self, created: &CreateResponse) {
        self.ctx.success("Sandbox created");
        self.ctx.kv("ID:     ", &created.id);
        self.ctx.kv("Name:   ", &created.name);
        self.ctx.kv("Status: ", &created.status);
    }

    /// Render a single sandbox record with its health indicator.
    pub fn render_status(&self, status: &SandboxStatus) {
        if self.ctx.quiet {
            println!("{}", status.status);
            return;
        }
        self.ctx.header("Sandbox Status");
        self.ctx.kv("Name:   ", &status.name);
        self.ctx.kv("ID:     ", &status.id);
        self.ctx.kv("Status: ", &status.status);
        self.ctx.kv("Created:", &status.created_at);
        self.ctx.kv("Updated:", &status.updated_at);
        if !status.metadata.is_empty() {
            self.ctx.kv("Metadata:", "");
            let mut entries: Vec<_> = status.metadata.iter().collect();
            entries.sort();
            for (key, value) in entries {
                println!("    {key}: {value}");
            }
        }
        println!();
        println!("  {}", health_line(&status.status));
    }

    /// Render every sandbox as an aligned table.
    pub fn render_list(&self, sandboxes: &[SandboxStatus]) {
        if sandboxes.is_empty() {
            if !self.ctx.quiet {
                println!("No sandboxes found.");
            }
            return;
        }
        let rows: Vec<[&str; 4]> = sandboxes
            .iter()
            .map(|s| [s.name.as_str(), s.id.as_str(), s.status.as_str(), s.created_at.as_str()])
            .collect();
        for line in table(["NAME", "ID", "STATUS", "CREATED AT"], &rows) {
            println!("{line}");
        }
    }

    /// Render the account's egress allow and deny lists.
    pub fn render_egress_rules(&self, rules: &EgressRules) {
        self.ctx.header("Egress rules");
        render_domains("Allowed domains:", &rules.allowed_domains);
        render_domains("Denied domains:", &rules.denied_domains);
    }
}

fn render_domains(title: &str, domains: &[String]) {
    if domains.is_empty() {
        println!("  {title} none");
        return;
    }
    println!("  {title}");
    for domain in domains {
        println!("    - {domain}");
    }
}

/// Status line with a coloured health marker.
#[must_use]
pub fn health_line(status: &str) -> String {
    match Health::from_status(status) {
        Health::Ready => "🟢 Sandbox is healthy and ready".to_string(),
        Health::Starting => "🟡 Sandbox is starting up".to_string(),
        Health::Stopped => "🟠 Sandbox is stopped".to_string(),
        Health::Failing => "🔴 Sandbox has errors".to_string(),
        Health::Unknown => format!("⚪ Sandbox status: {status}"),
    }
}

/// Left-aligned columns separated by two spaces, header first.
fn table<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> Vec<String> {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    std::iter::once(&header)
        .chain(rows)
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// One audit line: timestamp, verdict, optional protocol, host, optional mode.
#[must_use]
pub fn format_audit_line<Tz>(event: &AuditEvent, styles: &Styles, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let verdict = classify_verdict(event);
    let style = styles.verdict(verdict);
    let mut parts = vec![
        event
            .timestamp
            .with_timezone(tz)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        format!("{:<5}", verdict.label()).style(style).to_string(),
    ];
    if let Some(protocol) = event.protocol.as_deref().filter(|p| !p.is_empty()) {
        parts.push(format!("{protocol:<5}"));
    }
    parts.push(event.host.clone());
    if let Some(mode) = event.mode.as_deref().filter(|m| !m.is_empty()) {
        parts.push(format!("(mode: {mode})"));
    }
    parts.join("  ")
}

/// Prints audit events to stdout in local time. Never suppressed by `--quiet`.
pub struct AuditPrinter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> AuditPrinter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl AuditSink for AuditPrinter<'_> {
    fn event(&self, event: &AuditEvent) {
        println!("{}", format_audit_line(event, &self.ctx.styles, &Local));
    }
}
