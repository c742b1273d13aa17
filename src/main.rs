//! Folder Cleaner - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use folder_cleaner::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::list_entries,
    output::{
        confirm_on_terminal, print_banner, print_clean_stats, print_config_summary, print_error,
        print_info, print_success, print_warning,
    },
    tools::ensure_tools_available,
    Cleaner,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(Error::Aborted) => {
            print_info("Aborted by user, nothing was changed.");
            ExitCode::from(exit_codes::ABORT as u8)
        }
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::ToolNotFound(_) => ExitCode::from(exit_codes::ENVIRONMENT_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();
    let quiet = args.quiet || args.json;

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !quiet {
        print_banner();
    }

    // Load configuration
    let mut config = Config::discover(args.config.as_deref())?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and environment before touching any file
    validate_config(&config)?;
    let folder = std::fs::canonicalize(config.folder()?)?;

    if !quiet {
        print_config_summary(
            &folder,
            &config.options.mode.to_string(),
            &config.options.collision.to_string(),
        );
    }

    ensure_tools_available(&config)?;

    // Nothing is modified until the user agrees
    let entries = list_entries(&folder).await?;
    let needs_confirmation = !entries.is_empty() && !config.options.assume_yes;
    if needs_confirmation && !confirm_on_terminal(&folder, &entries)? {
        return Err(Error::Aborted);
    }

    let cleaner = Cleaner::from_config(&config);
    let report = cleaner.clean_entries(&folder, &entries).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_clean_stats(&report);

    let failures = report.stats.failures();
    if failures == 0 {
        print_success("Folder cleaned.");
    } else {
        print_warning(&format!(
            "Folder cleaned, {} file(s) could not be processed.",
            failures
        ));
    }

    Ok(())
}
