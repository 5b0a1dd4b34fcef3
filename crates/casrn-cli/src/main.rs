//! # casrn CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// CAS Registry Number toolkit.
///
/// Checks CAS Registry Numbers for valid notation, range and check digit,
/// and prints them in numeric order.
#[derive(Parser, Debug)]
#[command(name = "casrn", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate CAS Registry Numbers.
    Check(casrn_cli::check::CheckArgs),
    /// Print CAS Registry Numbers in ascending numeric order.
    Sort(casrn_cli::sort::SortArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Check(args) => {
            let invalid = casrn_cli::check::run(&args, &mut stdout)?;
            if invalid > 0 {
                anyhow::bail!("{invalid} of {} inputs invalid", args.inputs.len());
            }
        }
        Commands::Sort(args) => casrn_cli::sort::run(&args, &mut stdout)?,
    }

    Ok(())
}
