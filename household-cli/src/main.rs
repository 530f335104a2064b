use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use household_topology::{
    init_logging, snapshot, LoggingMode, LookupKey, StaticSource, TopologyConfig, TopologyError,
    TopologyEvent,
};

mod output;

/// Household topology inspector
///
/// Reads a ZoneGroupState document (as returned by GetZoneGroupState, or
/// captured from a topology event), prints the groups it describes and
/// resolves players to their group.
#[derive(Parser, Debug)]
#[command(name = "household")]
#[command(about = "Inspect household topology documents")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Keep invisible members (satellites, hidden stereo halves)
    #[arg(long, global = true)]
    pub include_invisible: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log mode (silent, development, debug, json)
    #[arg(long, global = true)]
    pub log_mode: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all groups of the household
    List(InputArgs),

    /// Find the group of one player
    Resolve {
        #[command(flatten)]
        input: InputArgs,

        /// Display name of the player, e.g. "Kitchen"
        #[arg(long)]
        name: Option<String>,

        /// Network host of the player, e.g. 192.168.1.20
        #[arg(long)]
        host: Option<String>,
    },

    /// List the groups carried by a topology NOTIFY body
    Event(InputArgs),
}

#[derive(ClapArgs, Debug)]
pub struct InputArgs {
    /// Document to read; stdin when omitted
    pub file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

impl Args {
    /// Environment config with command-line overrides applied
    fn config(&self) -> Result<TopologyConfig> {
        let mut config = TopologyConfig::from_env();
        if self.include_invisible {
            config = config.with_include_invisible(true);
        }
        if let Some(name) = &self.log_mode {
            let mode = LoggingMode::from_name(name)
                .with_context(|| format!("Unknown log mode '{}'", name))?;
            config = config.with_log_mode(mode);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    init_logging(config.log_mode).context("Failed to initialize logging")?;
    debug!(?config, "starting");

    match &args.command {
        Command::List(input) => {
            let source = StaticSource::new(input.read()?);
            let household = snapshot(&source, config.normalize_options())
                .context("Failed to build household from document")?;
            info!(groups = household.len(), "household loaded");
            output::print_household(&household, args.json)?;
        }
        Command::Resolve { input, name, host } => {
            let source = StaticSource::new(input.read()?);
            let household = snapshot(&source, config.normalize_options())
                .context("Failed to build household from document")?;

            let key = LookupKey::new(name.clone(), host.clone());
            match household.resolve(&key) {
                Ok(resolved) => output::print_resolved(&resolved, args.json)?,
                Err(TopologyError::PlayerNotFound(reason)) => {
                    // Not a failure of the tool: report and exit non-zero
                    eprintln!("{}", reason);
                    std::process::exit(2);
                }
                Err(e) => return Err(e).context("Failed to resolve player"),
            }
        }
        Command::Event(input) => {
            let event = TopologyEvent::from_xml(&input.read()?)
                .context("Failed to parse topology event")?;
            let household = event
                .household(config.normalize_options())
                .context("Failed to build household from event")?;
            output::print_household(&household, args.json)?;
        }
    }

    Ok(())
}
