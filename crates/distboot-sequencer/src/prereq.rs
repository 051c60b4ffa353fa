use std::path::Path;

use anyhow::Result;

use crate::{DebugLog, SequencerFailure};

pub fn require_file(path: &Path, exit_code: i32, what: &str, log: &DebugLog) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    missing(path, exit_code, what, log)
}

pub fn require_dir(path: &Path, exit_code: i32, what: &str, log: &DebugLog) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    missing(path, exit_code, what, log)
}

fn missing(path: &Path, exit_code: i32, what: &str, log: &DebugLog) -> Result<()> {
    let failure = SequencerFailure::new(exit_code, format!("{what} not found: {}", path.display()));
    log.error(failure.message());
    Err(failure.into())
}
