//! `kart` binary entry point.
//!
//! # Examples
//!
//! ```bash
//! kart search --preset lightweight --road 40 --terrain 40 --water 20
//! kart simulate --character Mario --machine "Standard Kart"
//! kart --lang ja presets
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use kart_client::{Cli, ClientConfig, Command, Context, logging};
use kart_content::{ContentFactory, LoadError};
use kart_core::KartError;

fn main() -> ExitCode {
    // Load .env file if it exists (for KART_DATA_DIR and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let config = cli.apply_to(ClientConfig::from_env());
    tracing::debug!(data_dir = %config.data_dir.display(), locale = %config.locale, "client configured");

    // Loading is all-or-nothing; no query runs without both catalogs.
    let session = match ContentFactory::new(&config.data_dir).load_session() {
        Ok(session) => session,
        Err(err) => {
            report_load_error(&config, &err);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &session, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, session: &kart_core::Session, config: &ClientConfig) -> Result<()> {
    let ctx = Context {
        locale: config.locale,
        result_limit: config.result_limit,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(session, ctx, &mut out)?;
    out.flush()?;
    Ok(())
}

fn report_load_error(config: &ClientConfig, err: &LoadError) {
    tracing::error!(
        severity = err.severity().as_str(),
        code = err.error_code(),
        path = %err.path().display(),
        "{err}"
    );

    let file = err
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| err.path().display().to_string());
    eprintln!("{}", style(config.locale.data_unavailable(&file)).red().bold());
    eprintln!("  {err}");
}
