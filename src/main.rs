//! perfwatch - host performance monitor
//!
//! A command-line tool that watches CPU load and available memory and
//! raises debounced, mutable alerts.

use clap::Parser;
use perfwatch::cli::args::{generate_completions, Cli, Commands};
use perfwatch::commands::{run_monitor, run_mute, run_sample, run_show};
use perfwatch::config::{Settings, SettingsBuilder};
use perfwatch::error::{AppError, SamplerError, StoreError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = load_settings(&cli).and_then(|settings| run(&cli, &settings));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn load_settings(cli: &Cli) -> Result<Settings, AppError> {
    let mut builder = SettingsBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_store_path(cli.store.clone());

    if let Commands::Run(args) = &cli.command {
        builder = builder
            .with_speech(args.no_speech.then_some(false))
            .with_announce_startup(args.quiet.then_some(false))
            .with_abort_on_sampler_error(args.abort_on_sampler_error.then_some(true));
    }

    let settings = builder.build();

    if settings.general.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }
    Ok(settings)
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    match &cli.command {
        Commands::Run(_) => run_monitor(settings),

        Commands::Show => run_show(settings, cli.format),

        Commands::Mute { channel, level } => {
            run_mute(settings, (*channel).into(), (*level).into(), cli.format)
        }

        Commands::Sample => run_sample(cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Store(StoreError::Io { path, .. }) => {
            eprintln!();
            eprintln!("Hint: Check that {} is writable.", path.display());
            eprintln!("      Use --store or PERFWATCH_STORE to pick another location.");
        }
        AppError::Sampler(SamplerError::Unsupported) => {
            eprintln!();
            eprintln!("Hint: CPU and memory sampling is not available on this platform.");
        }
        _ => {}
    }
}
