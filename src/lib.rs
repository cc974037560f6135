use anyhow::{Context, Error};
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

mod generator;
mod paths;

pub use crate::generator::GeneratorInvocation;
pub use crate::paths::ProjectPaths;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Print the generator command without executing it.
    #[arg(long)]
    dry_run: bool,

    /// Only print warnings/errors.
    #[arg(short, long)]
    quiet: bool,

    /// Show debug messages.
    #[arg(short, long)]
    debug: bool,
}

fn run(args: Args) -> Result<(), Error> {
    let level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let paths = ProjectPaths::discover()?;
    debug!("project root resolved to {}", paths.root.display());

    let invocation = GeneratorInvocation::new(&paths);
    // program output, not logging: the command line lands on stdout at any level
    println!("{invocation}");

    if args.dry_run {
        return Ok(());
    }

    let status = invocation
        .run()
        .context("Failed to launch the OpenAPI generator. Is npx on your PATH?")?;
    if !status.success() {
        error!("openapi-generator-cli failed: {status}");
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}

/// Run the CLI. The binary is a thin wrapper around this.
pub fn main_cli() -> Result<(), Error> {
    let args = Args::parse();
    run(args)
}
