//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::sample;
use crate::application::services::{format_amount, TallyService};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

/// Command used when none is given on the command line.
static DEFAULT_COMMAND: Commands = Commands::Total { room: None };

/// Run the parsed command line. Without a subcommand the office total is
/// printed.
#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");

    let result = match selected_command(cli) {
        Commands::Total { room } => cmd_total(&settings, room.as_deref()),
        Commands::Rooms => cmd_rooms(&settings),
        Commands::Config { command } => cmd_config(command, &settings, cli),
        Commands::Completion { shell } => cmd_completion(*shell),
    };

    if cli.pause || settings.pause {
        wait_for_enter()?;
    }
    result
}

fn selected_command(cli: &Cli) -> &Commands {
    cli.command.as_ref().unwrap_or(&DEFAULT_COMMAND)
}

fn office_tally() -> CliResult<TallyService> {
    let (inventory, office) = sample::office().map_err(ApplicationError::from)?;
    Ok(TallyService::new(inventory, office))
}

fn total_line(settings: &Settings, room: Option<&str>) -> CliResult<String> {
    let tally = office_tally()?;
    let total = match room {
        Some(name) => tally.room_total(name)?,
        None => tally.total()?,
    };
    Ok(format_amount(total, settings.precision))
}

/// Heading plus one (label, value) row per room and a closing total row.
fn room_rows(settings: &Settings) -> CliResult<(String, Vec<(String, String)>)> {
    let tally = office_tally()?;
    let root = tally.root();
    let heading = tally
        .inventory()
        .name(root)
        .map_err(ApplicationError::from)?
        .to_string();

    let row = |items: usize, total: f64| {
        format!(
            "{:>4} items  {}",
            items,
            format_amount(total, settings.precision)
        )
    };
    let mut rows: Vec<(String, String)> = tally
        .rooms()?
        .into_iter()
        .map(|room| (room.name, row(room.items, room.total)))
        .collect();
    rows.push((
        "Total".to_string(),
        row(tally.inventory().leaves(root).len(), tally.total()?),
    ));
    Ok((heading, rows))
}

#[instrument(skip(settings))]
fn cmd_total(settings: &Settings, room: Option<&str>) -> CliResult<()> {
    output::info(&total_line(settings, room)?);
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_rooms(settings: &Settings) -> CliResult<()> {
    let (heading, rows) = room_rows(settings)?;
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    output::header(&heading);
    for (label, value) in &rows {
        output::amount(label, width, value);
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings, cli: &Cli) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Init => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&format!("global: {}", path.display())),
                None => output::info("global: (no config directory)"),
            }
            if let Some(path) = &cli.config {
                output::info(&format!("file:   {}", path.display()));
            }
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn wait_for_enter() -> CliResult<()> {
    output::prompt("Press Enter to continue...");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| CliError::io("read stdin", e))?;
    Ok(())
}
