mod app;
mod command;
mod config;
mod error;
mod irc;
mod logging;
mod resolve;

use crate::app::action::{Action, ReturnCode};
use crate::app::event::HostEvent;
use crate::app::handler;
use crate::app::host::Host;
use crate::app::state::AddonState;
use crate::app::ADDON_NAME;
use crate::config::model::{describe_options, HostConfig};
use anyhow::Result;
use clap::Parser;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const ERROR_PREFIX: &str = "=!=\t";

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let path = args.config.unwrap_or_else(config::config_path);

    if args.init_config {
        config::save_config(&path, &config::AppConfig::default())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let cfg = config::load_config(&path)?;
    logging::init(&cfg.logging);
    tracing::info!(config = %path.display(), "starting headless host");

    run_host(cfg).await
}

/// Headless host for the buffer_open add-on, driven from stdin.
#[derive(Debug, Parser)]
#[command(name = "bufopen", version, about)]
struct CliArgs {
    /// Config file (defaults to <config dir>/bufopen/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

/// Host model driven from stdin: owns the open buffers and saved layouts
/// and executes whatever the add-on asks for.
struct HeadlessHost {
    buffers: BTreeSet<String>,
    layouts: HashMap<String, Vec<String>>,
}

impl HeadlessHost {
    fn new(cfg: &HostConfig) -> Self {
        Self {
            buffers: cfg.buffers.iter().cloned().collect(),
            layouts: cfg
                .layouts
                .iter()
                .map(|l| (l.name.clone(), l.buffers.clone()))
                .collect(),
        }
    }

    fn execute(&self, actions: Vec<Action>) {
        for action in actions {
            match &action {
                Action::Command { .. } => {
                    if let Some(cmd) = action.host_command() {
                        println!(">> {}", cmd);
                    }
                }
                Action::Print { error: true, text } => println!("{}{}", ERROR_PREFIX, text),
                Action::Print { error: false, text } => println!("{}", text),
            }
        }
    }
}

impl Host for HeadlessHost {
    fn buffer_exists(&self, full_name: &str) -> bool {
        self.buffers.contains(full_name)
    }

    fn layout_buffers(&self, layout: &str) -> Option<Vec<String>> {
        self.layouts.get(layout).cloned()
    }
}

/// One line of host input, already classified.
#[derive(Debug, PartialEq)]
enum HostLine {
    Addon(String),
    Help,
    BufferOpen(String),
    BufferClose(String),
    ListBuffers,
    CommandRun(String),
    Quit,
    Empty,
    Unknown(String),
}

fn parse_host_line(line: &str) -> HostLine {
    let line = line.trim();
    if line.is_empty() {
        return HostLine::Empty;
    }
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match head {
        "/quit" => HostLine::Quit,
        "/help" => HostLine::Help,
        "buffers" => HostLine::ListBuffers,
        "buffer" => match rest.split_once(' ') {
            Some(("open", name)) => HostLine::BufferOpen(name.trim().to_string()),
            Some(("close", name)) => HostLine::BufferClose(name.trim().to_string()),
            _ => HostLine::Unknown(line.to_string()),
        },
        cmd if cmd.strip_prefix('/') == Some(ADDON_NAME) => HostLine::Addon(rest.to_string()),
        cmd if cmd.starts_with('/') => HostLine::CommandRun(line.to_string()),
        _ => HostLine::Unknown(line.to_string()),
    }
}

async fn run_host(cfg: config::AppConfig) -> Result<()> {
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    let mut host = HeadlessHost::new(&cfg.host);
    let mut state = AddonState::new(cfg.options.clone());
    tracing::debug!(handlers = ?state.dispatcher.handler_names(), "open handlers registered");

    // Spawn stdin reader task
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    // Main event loop
    while let Some(line) = line_rx.recv().await {
        let event = match parse_host_line(&line) {
            HostLine::Quit => break,
            HostLine::Empty => continue,
            HostLine::Help => {
                println!("{}", command::HELP);
                println!();
                for desc in describe_options() {
                    println!("  {}", desc);
                }
                continue;
            }
            HostLine::ListBuffers => {
                for name in &host.buffers {
                    println!("  {}", name);
                }
                continue;
            }
            HostLine::BufferOpen(name) => {
                host.buffers.insert(name);
                continue;
            }
            HostLine::BufferClose(name) => {
                if !host.buffers.contains(&name) {
                    println!("{}no such buffer: {}", ERROR_PREFIX, name);
                    continue;
                }
                HostEvent::BufferClosing { full_name: name }
            }
            HostLine::Addon(args) => HostEvent::Command { args },
            HostLine::CommandRun(command) => HostEvent::CommandRun { command },
            HostLine::Unknown(line) => {
                println!("{}unknown input: {}", ERROR_PREFIX, line);
                continue;
            }
        };

        let closing = match &event {
            HostEvent::BufferClosing { full_name } => Some(full_name.clone()),
            _ => None,
        };

        let reply = handler::handle_event(&mut state, &host, event);
        if reply.code == ReturnCode::Error {
            tracing::debug!("add-on command returned an error status");
        }
        host.execute(reply.actions);

        if let Some(name) = closing {
            host.buffers.remove(&name);
        }
    }

    Ok(())
}
