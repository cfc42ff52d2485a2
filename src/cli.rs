use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pep639-check")]
#[command(about = "Check pyproject.toml license metadata against PEP 639")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flag deprecated `License ::` classifiers
    Classifiers(Files),
    /// Flag license-files globs that match no files
    GlobResolve(Files),
    /// Flag license-files globs using backslashes or `..`
    GlobSyntax(Files),
    /// Run every check, parsing each file once
    All(Files),
}

#[derive(Args)]
pub struct Files {
    /// pyproject.toml files to check
    pub filenames: Vec<PathBuf>,
}
