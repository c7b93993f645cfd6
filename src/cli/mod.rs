//! Command line front-end: renders a schedule snapshot as a text table.

pub mod output;
pub mod table;

use std::{env, error::Error, path::PathBuf};

use crate::{
    config::{Config, ConfigManager},
    schedules::{Formatters, SchedulesView, ViewAction},
    utils::{build_info, persistence},
};

use output::OutputPreferences;

const USAGE: &str = "Usage: schedules_cli <command>\n\
Commands:\n  \
list <snapshot.json> [--filter TEXT] [--show-completed] [--minimal] [--plain] [--config-dir DIR]\n  \
version";

/// Options accepted by `schedules_cli list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    pub snapshot: PathBuf,
    pub filter: String,
    pub show_completed: bool,
    pub minimal: bool,
    pub plain: bool,
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(ListArgs),
    Version,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("version") | Some("--version") => Ok(Command::Version),
        Some("list") => {
            let mut list = ListArgs::default();
            let mut snapshot = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--filter" => {
                        list.filter = args.next().ok_or("--filter expects a value")?;
                    }
                    "--config-dir" => {
                        let dir = args.next().ok_or("--config-dir expects a value")?;
                        list.config_dir = Some(PathBuf::from(dir));
                    }
                    "--show-completed" => list.show_completed = true,
                    "--minimal" => list.minimal = true,
                    "--plain" => list.plain = true,
                    other if other.starts_with("--") => {
                        return Err(format!("unknown option `{}`", other));
                    }
                    path => snapshot = Some(PathBuf::from(path)),
                }
            }
            list.snapshot = snapshot.ok_or("list expects a snapshot file")?;
            Ok(Command::List(list))
        }
        Some(other) => Err(format!("unknown command `{}`", other)),
        None => Err("missing command".to_string()),
    }
}

/// Entry point used by the `schedules_cli` binary.
pub fn run_cli() -> Result<(), Box<dyn Error>> {
    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            output::error(&message);
            eprintln!("{}", USAGE);
            return Err(message.into());
        }
    };

    match command {
        Command::Version => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        Command::List(args) => {
            println!("{}", render_list(&args)?);
            Ok(())
        }
    }
}

/// Loads the snapshot named by `args` and renders it with the user's config.
pub fn render_list(args: &ListArgs) -> Result<String, Box<dyn Error>> {
    let config = load_config(args.config_dir.clone());
    output::set_preferences(OutputPreferences {
        plain_mode: args.plain || !config.ui_color_enabled,
    });

    let snapshot = persistence::load_snapshot_from_file(&args.snapshot)?;
    tracing::info!(
        schedules = snapshot.schedules.len(),
        filter = %args.filter,
        "rendering schedules"
    );

    let currency = Formatters::from_config(&config).currency;
    let mut view = SchedulesView::new(
        Formatters::from_config(&config),
        config.allow_completed,
        config.minimal || args.minimal,
    );
    view.set_snapshot(snapshot);
    view.set_filter(args.filter.clone());
    if args.show_completed {
        view.dispatch(ViewAction::ToggleCompleted)?;
    }

    let show_completed = view.show_completed();
    Ok(table::render_schedule_table(
        view.table(),
        currency.as_ref(),
        show_completed,
    ))
}

fn load_config(config_dir: Option<PathBuf>) -> Config {
    let manager = match config_dir {
        Some(dir) => ConfigManager::with_base_dir(dir),
        None => ConfigManager::new(),
    };
    match manager.and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("using default configuration: {}", err));
            Config::default()
        }
    }
}
