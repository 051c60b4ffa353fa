use std::ffi::OsString;
use std::fs;

use anyhow::{Context, Result};
use distboot_core::{conda_env, BootstrapConfig, Flow, InstallLayout};

use crate::{
    debug_log_for, require_dir, require_file, CondaRunner, DebugLog, EXIT_BASE_MISSING,
    EXIT_CONDA_EXE_MISSING, EXIT_PAYLOAD_MISSING,
};

pub fn run_install(layout: &InstallLayout, config: &BootstrapConfig) -> Result<()> {
    let log = debug_log_for(layout, config, Flow::Install);
    let result = install_steps(layout, config, &log);
    if result.is_err() {
        log.dump();
    }
    result
}

fn install_steps(layout: &InstallLayout, config: &BootstrapConfig, log: &DebugLog) -> Result<()> {
    let conda_exe = layout.conda_exe_path();
    let payload = layout.payload_archive_path();
    let base = layout.base_path();

    require_file(&conda_exe, EXIT_CONDA_EXE_MISSING, "conda executable", log)?;
    require_file(&payload, EXIT_PAYLOAD_MISSING, "payload archive", log)?;

    let runner = CondaRunner::new(&conda_exe, conda_env(layout, config), log);

    runner.run(
        "extract payload",
        &[
            OsString::from("extract"),
            OsString::from("--prefix"),
            layout.install_dir().as_os_str().to_os_string(),
            OsString::from("--tar-from-stdin"),
        ],
        Some(&payload),
    )?;

    runner.run(
        "extract sub-packages",
        &[
            OsString::from("--prefix"),
            base.clone().into_os_string(),
            OsString::from("--extract-conda-pkgs"),
        ],
        None,
    )?;

    // Absence here means a corrupted or incompatible payload.
    require_dir(&base, EXIT_BASE_MISSING, "base environment", log)?;

    runner.run(
        "install packages",
        &[
            OsString::from("install"),
            OsString::from("--offline"),
            OsString::from("--file"),
            layout.manifest_path().into_os_string(),
            OsString::from("-yp"),
            base.into_os_string(),
        ],
        None,
    )?;

    fs::remove_file(&payload)
        .with_context(|| format!("failed to delete payload archive: {}", payload.display()))?;

    Ok(())
}
