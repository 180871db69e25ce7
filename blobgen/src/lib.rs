//! Shared front end of the `png2rgba` and `res2c` tools.

use std::path::{Path, PathBuf};

use anyhow::Context;
use blobgen_assets::{generate, GenerateOptions, Generated, Kind};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Embed a folder of assets as C++ byte arrays")]
pub struct Args {
    /// Name of the generated files, include guard and C++ namespace.
    pub namespace: String,
    /// Folder scanned recursively for input files.
    pub folder: PathBuf,
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(kind: Kind, args: &Args, out_dir: &Path) -> anyhow::Result<Generated> {
    let options = GenerateOptions::new(&args.namespace, &args.folder, out_dir);
    let generated = generate(kind, &options).with_context(|| {
        format!(
            "cannot generate '{}' from {}",
            options.namespace,
            args.folder.display()
        )
    })?;
    info!(
        "wrote {} assets to {} and {}",
        generated.assets,
        generated.header.display(),
        generated.source.display()
    );
    Ok(generated)
}

/// Entry point of both binaries. Output goes to the current directory.
pub fn main(kind: Kind) -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();
    let out_dir = std::env::current_dir().context("cannot determine current directory")?;
    run(kind, &args, &out_dir)?;
    Ok(())
}
