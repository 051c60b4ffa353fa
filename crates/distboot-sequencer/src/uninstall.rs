use std::ffi::OsString;
use std::fs::File;

use anyhow::{Context, Result};
use distboot_core::{conda_env, BootstrapConfig, Flow, InstallLayout};

use crate::{debug_log_for, require_file, CondaRunner, DebugLog, EXIT_CONDA_EXE_MISSING};

pub fn run_uninstall(layout: &InstallLayout, config: &BootstrapConfig) -> Result<()> {
    let log = debug_log_for(layout, config, Flow::Uninstall);
    let result = uninstall_steps(layout, config, &log);
    if result.is_err() {
        log.dump();
    }
    result
}

fn uninstall_steps(layout: &InstallLayout, config: &BootstrapConfig, log: &DebugLog) -> Result<()> {
    let conda_exe = layout.conda_exe_path();
    let payload = layout.payload_archive_path();
    let base = layout.base_path();

    require_file(&conda_exe, EXIT_CONDA_EXE_MISSING, "conda executable", log)?;

    // Install deleted the archive, but the host framework's file manifest
    // still references it and verifies it during cleanup.
    log.section(&format!(
        "recreate payload placeholder: {}",
        payload.display()
    ));
    File::create(&payload).with_context(|| {
        format!(
            "failed to recreate payload placeholder: {}",
            payload.display()
        )
    })?;

    let runner = CondaRunner::new(&conda_exe, conda_env(layout, config), log);

    if config.remove_menus {
        runner.run(
            "remove menu entries",
            &[
                OsString::from("menuinst"),
                OsString::from("--prefix"),
                base.clone().into_os_string(),
                OsString::from("--remove"),
            ],
            None,
        )?;
    }

    runner.run(
        "uninstall environment",
        &[
            OsString::from("constructor"),
            OsString::from("uninstall"),
            OsString::from("--prefix"),
            base.into_os_string(),
        ],
        None,
    )?;

    Ok(())
}
