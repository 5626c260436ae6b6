//! Command-line interface entry point for `techtree`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use tech_tree::config::Config;
use tech_tree::info;
use tech_tree::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Stored config is what `config` edits and saves; overrides only affect this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Build {
            input_file,
            format,
            output,
            progress,
        } => {
            let request = commands::build::BuildRequest {
                input_file: &input_file,
                format: &format,
                output_file: output.as_deref(),
                progress_file: progress.as_deref(),
            };
            if !commands::build::run(&request, &config) {
                std::process::exit(1);
            }
        }
        Command::Outline { input_file } => {
            if !commands::outline::run(&input_file) {
                std::process::exit(1);
            }
        }
    }
}
