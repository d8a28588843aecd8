use std::{convert::Infallible, path::Path, process::ExitCode};

use clap::Parser;
use meshpack::{ExecuteError, MeshCompiler};

mod cli;
mod device;
mod report;
mod xml;

use cli::Cli;
use device::LogDevice;

#[derive(Debug, thiserror::Error)]
enum InfoError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    Compile(#[from] meshpack::Error),
    #[error(transparent)]
    Render(#[from] ExecuteError<Infallible>),
}

#[tracing::instrument(skip(cli))]
fn inspect(cli: &Cli, path: &Path) -> Result<(), InfoError> {
    let document = std::fs::read_to_string(path)?;
    let tokens = xml::tokens(&document)?;
    let compiler = MeshCompiler::with_options(cli.compile_options());
    tracing::debug!(options = ?compiler.options(), "compiling");
    let mesh = compiler.compile_tokens(tokens)?;

    println!("{}", path.display());
    report::print(&mesh);

    let mut device = LogDevice::default();
    let uploaded = mesh.upload(&mut device)?;
    uploaded.render(&mut device)?;
    tracing::info!(draws = device.draws(), "replayed render commands");
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli);

    let mut failed = 0;
    for path in &cli.files {
        if let Err(e) = inspect(&cli, path) {
            tracing::error!(path = %path.display(), error = %e, "couldn't inspect mesh");
            failed += 1;
        }
    }

    match failed {
        0 => ExitCode::SUCCESS,
        _ => {
            tracing::error!(failed, total = cli.files.len(), "some meshes failed");
            ExitCode::FAILURE
        }
    }
}
