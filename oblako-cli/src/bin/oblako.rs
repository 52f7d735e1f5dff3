use std::io;
use std::process::ExitCode;

use clap::Parser;
use oblako_cli::Cli;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_observability(cli.log_json);

    let stdout = io::stdout();
    match oblako_cli::run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "word cloud run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_observability(json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,oblako_core=debug".into());

    // Logs go to stderr so stdout stays machine readable.
    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_line_number(true)
                    .with_file(true)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .init();
    }
}
