use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use crossterm::style::Stylize;
use log::{debug, info};

use cmdpick_cli::cli_args::Args;
use cmdpick_cli::command_selection::{SelectorEngine, TerminalEvents, TerminalRenderer};
use cmdpick_core::command_definitions::CommandRecord;
use cmdpick_core::error::{Error, Result};
use cmdpick_core::upload::{ItermChooser, RsyncUploader};
use cmdpick_core::{config, execution, file_handling};

fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(log_file) = &args.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| Error::io_error("log".to_string(), log_file.clone(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn print_command(record: &CommandRecord) {
    println!(
        "{} {}",
        format!("Execute {} :", record.name).red(),
        record.command.as_str().green()
    );
}

/// Runs one selector session on its own thread and returns the receiving end.
fn spawn_selector(
    args: &Args,
    catalog: Vec<CommandRecord>,
) -> (mpsc::Receiver<CommandRecord>, thread::JoinHandle<Result<()>>) {
    let (result_sink, selections) = mpsc::sync_channel(1);
    let settings = args.selector_settings();
    let register_upload = !args.no_upload;

    let handle = thread::spawn(move || {
        let renderer = TerminalRenderer::open()?;
        let mut engine = SelectorEngine::new(catalog, renderer, result_sink, settings)?;
        if register_upload {
            engine.register_upload_capability(Box::new(RsyncUploader::new(ItermChooser)));
        }

        engine.run(&mut TerminalEvents)
    });

    (selections, handle)
}

fn execute() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    // Fails on an empty catalog before the terminal is touched
    let catalog = file_handling::get_catalog(&config_path)?;
    let shell = config::get_shell();

    let (selections, selector) = spawn_selector(&args, catalog);

    let mut outcome = Ok(());
    for record in selections {
        if record.is_sentinel() {
            debug!("No command selected");
            break;
        }

        print_command(&record);

        if args.dry_run {
            info!("Dry run is specified, not executing `{}`", record.name);
            println!("Dry run is specified, exiting without executing.");
            continue;
        }

        outcome = execution::execute_command(&shell, &record);
        if outcome.is_err() {
            break;
        }
    }

    selector.join().map_err(|_| Error::SelectorPanicked)??;
    outcome
}

fn main() -> ExitCode {
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
