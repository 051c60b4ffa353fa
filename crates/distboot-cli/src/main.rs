use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use distboot_core::{resolve_install_dir, BootstrapConfig, InstallLayout};
use distboot_sequencer::{exit_code_for, run_install, run_uninstall, SequencerFailure};

#[derive(Parser, Debug)]
#[command(name = "distboot")]
#[command(about = "Offline bootstrap for a packaged conda distribution", long_about = None)]
struct Cli {
    #[arg(long)]
    install_dir: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Install,
    Uninstall,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.downcast_ref::<SequencerFailure>().is_none() {
                eprintln!("distboot: {err:#}");
            }
            let code = exit_code_for(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let install_dir = match cli.install_dir {
        Some(dir) => dir,
        None => resolve_install_dir()?,
    };

    let config = match &cli.config {
        Some(path) => BootstrapConfig::load(path)?,
        None => BootstrapConfig::load_or_default(&BootstrapConfig::default_path(&install_dir))?,
    };

    let layout = InstallLayout::new(install_dir, &config);
    match cli.command {
        Commands::Install => run_install(&layout, &config),
        Commands::Uninstall => run_uninstall(&layout, &config),
    }
}
