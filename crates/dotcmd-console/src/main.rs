//! dotcmd interactive console.
//!
//! Reads command lines from stdin and routes them through a dispatcher
//! loaded with the demo command set. `:complete <line>` prints tab
//! completions for a partial line, `help` lists commands, `quit` exits.

mod config;
mod demo;
mod sender;
mod session;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use config::ConsoleConfig;
use dotcmd_core::{Dispatcher, LogSink};
use sender::ConsoleSender;
use session::{Flow, Session};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config path from CLI arg or DOTCMD_CONFIG env var; defaults otherwise.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DOTCMD_CONFIG").ok())
    {
        Some(path) => ConsoleConfig::load(Path::new(&path))
            .with_context(|| format!("loading console config {path}"))?,
        None => ConsoleConfig::default(),
    };
    log::info!(
        "Starting dotcmd console as {} (plugin {})",
        config.sender,
        config.framework.plugin_name
    );

    let mut dispatcher = Dispatcher::new(config.framework.clone()).with_diagnostics(LogSink);
    let registered = dispatcher.register_all(demo::registrations());
    log::info!(
        "Registered {registered} entries under {} top-level commands",
        dispatcher.host_commands().len()
    );

    let sender = ConsoleSender::new(&config.sender, config.permissions.iter().cloned());
    let session = Session::new(dispatcher, sender);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("{}", config.prompt);
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.run_line(line.trim_end_matches(['\r', '\n'])) {
            Ok(Flow::Continue) => {},
            Ok(Flow::Quit) => break,
            Err(e) => {
                log::error!("{e:#}");
                println!("error: {e}");
            },
        }
    }

    log::info!("Console closed");
    Ok(())
}
