use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::handle_check;
use pep639_check::{logging, CheckKind};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let failed = match cli.command {
        Commands::Classifiers(files) => handle_check(&[CheckKind::Classifiers], &files.filenames)?,
        Commands::GlobResolve(files) => handle_check(&[CheckKind::GlobResolve], &files.filenames)?,
        Commands::GlobSyntax(files) => handle_check(&[CheckKind::GlobSyntax], &files.filenames)?,
        Commands::All(files) => handle_check(&CheckKind::ALL, &files.filenames)?,
    };

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
